use std::sync::Arc;

use apiward_core::{AppResult, TenantId, UserIdentity};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{AuditLogEntry, AuditLogQuery, AuditLogRepository};

use super::AuditLogService;

#[derive(Default)]
struct RecordingAuditLogRepository {
    calls: Mutex<Vec<(TenantId, AuditLogQuery)>>,
}

#[async_trait]
impl AuditLogRepository for RecordingAuditLogRepository {
    async fn list_recent_entries(
        &self,
        tenant_id: TenantId,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        self.calls.lock().await.push((tenant_id, query));
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn listing_is_scoped_to_actor_workspace_and_clamped() {
    let repository = Arc::new(RecordingAuditLogRepository::default());
    let service = AuditLogService::new(repository.clone());
    let tenant_id = TenantId::new();
    let actor = UserIdentity::new("user_1", "Alice", tenant_id);

    let result = service
        .list_audit_log(
            &actor,
            AuditLogQuery {
                limit: 10_000,
                offset: 90_000,
                action: Some("api.update".to_owned()),
            },
        )
        .await;
    assert!(result.is_ok());

    let calls = repository.calls.lock().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, tenant_id);
    assert_eq!(calls[0].1.limit, AuditLogQuery::MAX_LIMIT);
    assert_eq!(calls[0].1.offset, AuditLogQuery::MAX_OFFSET);
}

#[tokio::test]
async fn zero_limit_is_raised_to_one() {
    let repository = Arc::new(RecordingAuditLogRepository::default());
    let service = AuditLogService::new(repository.clone());
    let actor = UserIdentity::new("user_1", "Alice", TenantId::new());

    let result = service
        .list_audit_log(
            &actor,
            AuditLogQuery {
                limit: 0,
                offset: 0,
                action: None,
            },
        )
        .await;
    assert!(result.is_ok());
    assert_eq!(repository.calls.lock().await[0].1.limit, 1);
}
