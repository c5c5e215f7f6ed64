use std::collections::HashMap;
use std::sync::Arc;

use apiward_core::{AppError, AppResult, TenantId, UserIdentity};
use apiward_domain::{Feature, Workspace};
use async_trait::async_trait;

use crate::WorkspaceRepository;

use super::AuthorizationService;

struct FakeWorkspaceRepository {
    workspaces: HashMap<TenantId, Workspace>,
}

#[async_trait]
impl WorkspaceRepository for FakeWorkspaceRepository {
    async fn find_workspace(&self, tenant_id: TenantId) -> AppResult<Option<Workspace>> {
        Ok(self.workspaces.get(&tenant_id).cloned())
    }
}

fn service_with(workspaces: Vec<Workspace>) -> AuthorizationService {
    AuthorizationService::new(Arc::new(FakeWorkspaceRepository {
        workspaces: workspaces
            .into_iter()
            .map(|workspace| (workspace.tenant_id(), workspace))
            .collect(),
    }))
}

#[tokio::test]
async fn resolve_workspace_returns_bound_workspace() {
    let tenant_id = TenantId::new();
    let service = service_with(vec![Workspace::new(
        tenant_id,
        "Acme",
        [Feature::IpWhitelist],
    )]);
    let actor = UserIdentity::new("user_1", "Alice", tenant_id);

    let workspace = service.resolve_workspace(&actor).await;
    assert!(workspace.is_ok_and(|workspace| workspace.has_feature(Feature::IpWhitelist)));
}

#[tokio::test]
async fn resolve_workspace_rejects_unknown_workspace() {
    let service = service_with(Vec::new());
    let actor = UserIdentity::new("user_1", "Alice", TenantId::new());

    let result = service.resolve_workspace(&actor).await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[test]
fn workspace_access_requires_matching_tenant() {
    let service = service_with(Vec::new());
    let workspace = Workspace::new(TenantId::new(), "Acme", []);
    let outsider = UserIdentity::new("user_2", "Bob", TenantId::new());

    let result = service.require_workspace_access(&outsider, &workspace);
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[test]
fn missing_feature_is_forbidden_not_missing() {
    let service = service_with(Vec::new());
    let workspace = Workspace::new(TenantId::new(), "Free tier", []);

    let result = service.require_feature(&workspace, Feature::IpWhitelist);
    let Err(AppError::Forbidden(message)) = result else {
        panic!("expected forbidden, got {result:?}");
    };
    assert!(message.contains("enterprise"));
}
