use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use apiward_application::WorkspaceRepository;
use apiward_core::{AppResult, TenantId};
use apiward_domain::Workspace;

/// In-memory workspace repository.
#[derive(Debug, Default)]
pub struct InMemoryWorkspaceRepository {
    workspaces: RwLock<HashMap<TenantId, Workspace>>,
}

impl InMemoryWorkspaceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a workspace.
    pub async fn insert_workspace(&self, workspace: Workspace) {
        self.workspaces
            .write()
            .await
            .insert(workspace.tenant_id(), workspace);
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspaceRepository {
    async fn find_workspace(&self, tenant_id: TenantId) -> AppResult<Option<Workspace>> {
        Ok(self.workspaces.read().await.get(&tenant_id).cloned())
    }
}
