use std::sync::Arc;

use apiward_core::{AppResult, UserIdentity};

use crate::{AuditLogEntry, AuditLogQuery, AuditLogRepository};

/// Read-side service for the workspace audit trail.
#[derive(Clone)]
pub struct AuditLogService {
    repository: Arc<dyn AuditLogRepository>,
}

impl AuditLogService {
    /// Creates a new service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn AuditLogRepository>) -> Self {
        Self { repository }
    }

    /// Returns recent audit entries of the actor's workspace.
    pub async fn list_audit_log(
        &self,
        actor: &UserIdentity,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        self.repository
            .list_recent_entries(actor.tenant_id(), query.clamped())
            .await
    }
}

#[cfg(test)]
mod tests;
