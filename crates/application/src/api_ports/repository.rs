use apiward_core::{AppResult, TenantId};
use apiward_domain::{ApiId, ApiResource};
use async_trait::async_trait;

use crate::AuditEvent;

/// Whitelist write plus the audit event that must be persisted with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpWhitelistUpdate {
    /// Owning workspace of the api.
    pub tenant_id: TenantId,
    /// Target api.
    pub api_id: ApiId,
    /// New storage value, `None` clears the whitelist.
    pub ip_whitelist: Option<String>,
    /// Audit event describing the change.
    pub audit_event: AuditEvent,
}

/// Repository port for api records.
#[async_trait]
pub trait ApiRepository: Send + Sync {
    /// Finds a live (not soft-deleted) api inside the workspace.
    async fn find_api(&self, tenant_id: TenantId, api_id: &ApiId)
    -> AppResult<Option<ApiResource>>;

    /// Writes the whitelist and appends the audit event as one unit.
    ///
    /// Implementations must either persist both writes or neither of them.
    async fn update_ip_whitelist(&self, update: IpWhitelistUpdate) -> AppResult<()>;
}
