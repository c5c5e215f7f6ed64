//! Application services and ports.

#![forbid(unsafe_code)]

mod api_ports;
mod api_service;
mod audit_log_service;
mod audit_recorder;
mod authorization_service;

pub use api_ports::{
    ApiRepository, AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository,
    IpWhitelistUpdate, WorkspaceRepository,
};
pub use api_service::{API_NOT_FOUND_MESSAGE, ApiService, RequestContext};
pub use audit_log_service::AuditLogService;
pub use audit_recorder::ip_whitelist_change_event;
pub use authorization_service::{AuthorizationService, feature_upsell_message};
