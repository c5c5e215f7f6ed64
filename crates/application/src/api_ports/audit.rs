use apiward_core::{AppResult, TenantId};
use apiward_domain::{AuditAction, AuditActor, AuditContext, AuditResource};
use async_trait::async_trait;

/// Immutable audit event payload emitted by application services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Tenant scope for the event.
    pub tenant_id: TenantId,
    /// Principal that performed the action.
    pub actor: AuditActor,
    /// Stable audit action identifier.
    pub action: AuditAction,
    /// Human-readable summary of the change.
    pub description: String,
    /// Resources touched by the action, in order.
    pub resources: Vec<AuditResource>,
    /// Request metadata.
    pub context: AuditContext,
}

/// Audit log entry projection for administrative views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    /// Stable event identifier.
    pub event_id: String,
    /// Principal that performed the action.
    pub actor: AuditActor,
    /// Stable action identifier.
    pub action: String,
    /// Human-readable summary of the change.
    pub description: String,
    /// Resources touched by the action.
    pub resources: Vec<AuditResource>,
    /// Request metadata.
    pub context: AuditContext,
    /// Event timestamp in RFC3339.
    pub created_at: String,
}

/// Query parameters for audit log listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogQuery {
    /// Maximum rows returned.
    pub limit: usize,
    /// Number of rows skipped for offset pagination.
    pub offset: usize,
    /// Optional action filter.
    pub action: Option<String>,
}

impl AuditLogQuery {
    /// Upper bound applied to `limit`.
    pub const MAX_LIMIT: usize = 200;
    /// Upper bound applied to `offset`.
    pub const MAX_OFFSET: usize = 5_000;

    /// Returns the query with limit and offset clamped to supported bounds.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.clamp(1, Self::MAX_LIMIT),
            offset: self.offset.min(Self::MAX_OFFSET),
            action: self.action,
        }
    }
}

/// Repository port for reading tenant audit logs.
///
/// Entries are only ever written together with the change they describe, see
/// [`crate::ApiRepository::update_ip_whitelist`].
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Lists most recent tenant audit entries, newest first.
    async fn list_recent_entries(
        &self,
        tenant_id: TenantId,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>>;
}
