use apiward_core::{AppResult, TenantId};
use apiward_domain::Workspace;
use async_trait::async_trait;

/// Port for resolving workspaces and their plan entitlements.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Finds a workspace by id.
    async fn find_workspace(&self, tenant_id: TenantId) -> AppResult<Option<Workspace>>;
}
