mod audit;
mod repository;
mod workspace;

pub use audit::{AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository};
pub use repository::{ApiRepository, IpWhitelistUpdate};
pub use workspace::WorkspaceRepository;
