//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod api;
mod audit;
mod ip_whitelist;
mod workspace;

pub use api::{ApiId, ApiResource};
pub use audit::{AuditAction, AuditActor, AuditActorKind, AuditContext, AuditResource};
pub use ip_whitelist::{IP_WHITELIST_SEPARATOR, IpWhitelist};
pub use workspace::{Feature, Workspace};
