use std::sync::Arc;

use apiward_core::{AppError, AppResult, UserIdentity};
use apiward_domain::{Feature, Workspace};
use tracing::debug;

use crate::WorkspaceRepository;

/// Returns the caller-facing message for a missing plan entitlement.
#[must_use]
pub fn feature_upsell_message(feature: Feature) -> &'static str {
    match feature {
        Feature::IpWhitelist => {
            "IP Whitelisting is only available for enterprise plans. Please contact support."
        }
    }
}

/// Application service for workspace access and entitlement checks.
#[derive(Clone)]
pub struct AuthorizationService {
    workspace_repository: Arc<dyn WorkspaceRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(workspace_repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self {
            workspace_repository,
        }
    }

    /// Resolves the workspace the session is bound to, with its entitlements.
    pub async fn resolve_workspace(&self, actor: &UserIdentity) -> AppResult<Workspace> {
        let workspace = self
            .workspace_repository
            .find_workspace(actor.tenant_id())
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("session is not bound to an active workspace".to_owned())
            })?;

        self.require_workspace_access(actor, &workspace)?;
        Ok(workspace)
    }

    /// Ensures the session identity is bound to the workspace.
    pub fn require_workspace_access(
        &self,
        actor: &UserIdentity,
        workspace: &Workspace,
    ) -> AppResult<()> {
        if actor.is_bound_to(workspace.tenant_id()) {
            return Ok(());
        }

        debug!(
            subject = actor.subject(),
            tenant_id = %workspace.tenant_id(),
            "rejected access to foreign workspace"
        );
        Err(AppError::Unauthorized("session is not bound to this workspace".to_owned()))
    }

    /// Ensures the workspace plan includes the feature.
    pub fn require_feature(&self, workspace: &Workspace, feature: Feature) -> AppResult<()> {
        if workspace.has_feature(feature) {
            return Ok(());
        }

        debug!(
            tenant_id = %workspace.tenant_id(),
            feature = feature.as_str(),
            "workspace plan is missing feature"
        );
        Err(AppError::Forbidden(feature_upsell_message(feature).to_owned()))
    }
}

#[cfg(test)]
mod tests;
