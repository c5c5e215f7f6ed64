use std::sync::Arc;

use apiward_core::{AppError, AppResult, TenantId, UserIdentity};
use apiward_domain::{ApiId, ApiResource, AuditContext, Feature, IpWhitelist, Workspace};
use tracing::info;

use crate::{ApiRepository, AuthorizationService, IpWhitelistUpdate, ip_whitelist_change_event};

/// Caller-facing message for apis that are missing, deleted or foreign.
pub const API_NOT_FOUND_MESSAGE: &str =
    "We are unable to find the correct API. Please try again or contact support.";

/// Explicit per-request context handed in by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Authenticated user performing the request.
    pub actor: UserIdentity,
    /// Workspace the request targets, with resolved entitlements.
    pub workspace: Workspace,
    /// Request metadata recorded on audit entries.
    pub audit: AuditContext,
}

/// Application service for api configuration.
#[derive(Clone)]
pub struct ApiService {
    authorization_service: AuthorizationService,
    repository: Arc<dyn ApiRepository>,
}

impl ApiService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        authorization_service: AuthorizationService,
        repository: Arc<dyn ApiRepository>,
    ) -> Self {
        Self {
            authorization_service,
            repository,
        }
    }

    /// Returns a live api in the caller's workspace.
    pub async fn get_api(&self, context: &RequestContext, api_id: &str) -> AppResult<ApiResource> {
        let api_id = ApiId::new(api_id)?;
        self.authorization_service
            .require_workspace_access(&context.actor, &context.workspace)?;

        self.locate_api(context.workspace.tenant_id(), &api_id).await
    }

    /// Replaces an api's IP whitelist and records the change in the audit log.
    ///
    /// Blank input clears the whitelist. Input is validated before any access
    /// check, and access checks run before anything is read or written.
    pub async fn update_ip_whitelist(
        &self,
        context: &RequestContext,
        api_id: &str,
        ip_whitelist: Option<&str>,
    ) -> AppResult<()> {
        let ip_whitelist = IpWhitelist::parse(ip_whitelist)?;
        let api_id = ApiId::new(api_id)?;

        self.authorization_service
            .require_workspace_access(&context.actor, &context.workspace)?;
        self.authorization_service
            .require_feature(&context.workspace, Feature::IpWhitelist)?;

        let tenant_id = context.workspace.tenant_id();
        let api = self.locate_api(tenant_id, &api_id).await?;

        let new_value = ip_whitelist.as_ref().map(IpWhitelist::to_storage_value);
        let audit_event = ip_whitelist_change_event(context, &api, new_value.as_deref());

        self.repository
            .update_ip_whitelist(IpWhitelistUpdate {
                tenant_id,
                api_id: api_id.clone(),
                ip_whitelist: new_value,
                audit_event,
            })
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to update ip whitelist for api '{api_id}' in tenant '{tenant_id}': {error}"
                ))
            })?;

        info!(
            tenant_id = %tenant_id,
            api_id = %api_id,
            subject = context.actor.subject(),
            entries = ip_whitelist.as_ref().map_or(0, |whitelist| whitelist.entries().len()),
            "api ip whitelist updated"
        );

        Ok(())
    }

    async fn locate_api(&self, tenant_id: TenantId, api_id: &ApiId) -> AppResult<ApiResource> {
        let api = self
            .repository
            .find_api(tenant_id, api_id)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to load api '{api_id}' in tenant '{tenant_id}': {error}"
                ))
            })?;

        api.filter(|api| api.tenant_id() == tenant_id && !api.is_deleted())
            .ok_or_else(|| AppError::NotFound(API_NOT_FOUND_MESSAGE.to_owned()))
    }
}
