use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use apiward_application::{
    ApiRepository, AuditLogEntry, AuditLogQuery, AuditLogRepository, IpWhitelistUpdate,
};
use apiward_core::{AppError, AppResult, TenantId};
use apiward_domain::{ApiId, ApiResource};

/// In-memory api and audit log repository.
///
/// Both writes of a whitelist update happen while holding both locks, so
/// readers never observe one without the other.
#[derive(Debug, Default)]
pub struct InMemoryApiRepository {
    apis: RwLock<HashMap<String, ApiResource>>,
    audit_entries: RwLock<Vec<(TenantId, AuditLogEntry)>>,
}

impl InMemoryApiRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an api record.
    pub async fn insert_api(&self, api: ApiResource) {
        self.apis
            .write()
            .await
            .insert(api.id().as_str().to_owned(), api);
    }

    /// Returns an api record regardless of tenant or soft-delete state.
    pub async fn api(&self, api_id: &str) -> Option<ApiResource> {
        self.apis.read().await.get(api_id).cloned()
    }
}

#[async_trait]
impl ApiRepository for InMemoryApiRepository {
    async fn find_api(
        &self,
        tenant_id: TenantId,
        api_id: &ApiId,
    ) -> AppResult<Option<ApiResource>> {
        Ok(self
            .apis
            .read()
            .await
            .get(api_id.as_str())
            .filter(|api| api.tenant_id() == tenant_id && !api.is_deleted())
            .cloned())
    }

    async fn update_ip_whitelist(&self, update: IpWhitelistUpdate) -> AppResult<()> {
        let mut apis = self.apis.write().await;
        let mut audit_entries = self.audit_entries.write().await;

        let api = apis
            .get_mut(update.api_id.as_str())
            .filter(|api| api.tenant_id() == update.tenant_id && !api.is_deleted())
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "api '{}' in tenant '{}' is no longer live",
                    update.api_id, update.tenant_id
                ))
            })?;

        let event = update.audit_event;
        api.set_ip_whitelist(update.ip_whitelist);
        audit_entries.push((
            event.tenant_id,
            AuditLogEntry {
                event_id: Uuid::new_v4().to_string(),
                actor: event.actor,
                action: event.action.as_str().to_owned(),
                description: event.description,
                resources: event.resources,
                context: event.context,
                created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        ));

        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryApiRepository {
    async fn list_recent_entries(
        &self,
        tenant_id: TenantId,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        let query = query.clamped();

        Ok(self
            .audit_entries
            .read()
            .await
            .iter()
            .rev()
            .filter(|(stored_tenant_id, entry)| {
                *stored_tenant_id == tenant_id
                    && query
                        .action
                        .as_deref()
                        .is_none_or(|action| entry.action == action)
            })
            .skip(query.offset)
            .take(query.limit)
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests;
