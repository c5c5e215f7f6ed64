use apiward_application::{
    ApiRepository, AuditEvent, AuditLogQuery, AuditLogRepository, IpWhitelistUpdate,
};
use apiward_core::TenantId;
use apiward_domain::{ApiId, ApiResource, AuditAction, AuditActor, AuditContext};
use chrono::Utc;

use super::InMemoryApiRepository;

fn api(id: &str, tenant_id: TenantId) -> ApiResource {
    match ApiResource::new(id, tenant_id, "Payments", Some("9.9.9.9".to_owned()), None) {
        Ok(api) => api,
        Err(error) => panic!("invalid test api: {error}"),
    }
}

fn api_id(value: &str) -> ApiId {
    match ApiId::new(value) {
        Ok(api_id) => api_id,
        Err(error) => panic!("invalid test api id: {error}"),
    }
}

fn update(tenant_id: TenantId, id: &str, description: &str) -> IpWhitelistUpdate {
    IpWhitelistUpdate {
        tenant_id,
        api_id: api_id(id),
        ip_whitelist: Some("1.2.3.4".to_owned()),
        audit_event: AuditEvent {
            tenant_id,
            actor: AuditActor::user("user_1"),
            action: AuditAction::ApiUpdated,
            description: description.to_owned(),
            resources: Vec::new(),
            context: AuditContext::default(),
        },
    }
}

fn all_entries() -> AuditLogQuery {
    AuditLogQuery {
        limit: 50,
        offset: 0,
        action: None,
    }
}

#[tokio::test]
async fn update_changes_api_and_appends_entry() {
    let repository = InMemoryApiRepository::new();
    let tenant_id = TenantId::new();
    repository.insert_api(api("api_1", tenant_id)).await;

    let result = repository
        .update_ip_whitelist(update(tenant_id, "api_1", "first"))
        .await;
    assert!(result.is_ok());

    let stored = repository.api("api_1").await;
    assert!(stored.is_some_and(|api| api.ip_whitelist() == Some("1.2.3.4")));

    let entries = repository
        .list_recent_entries(tenant_id, all_entries())
        .await
        .unwrap_or_default();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "api.update");
}

#[tokio::test]
async fn entries_are_listed_newest_first_per_tenant() {
    let repository = InMemoryApiRepository::new();
    let tenant_id = TenantId::new();
    let other_tenant_id = TenantId::new();
    repository.insert_api(api("api_1", tenant_id)).await;
    repository.insert_api(api("api_2", other_tenant_id)).await;

    for (tenant, id, description) in [
        (tenant_id, "api_1", "first"),
        (other_tenant_id, "api_2", "foreign"),
        (tenant_id, "api_1", "second"),
    ] {
        assert!(
            repository
                .update_ip_whitelist(update(tenant, id, description))
                .await
                .is_ok()
        );
    }

    let entries = repository
        .list_recent_entries(tenant_id, all_entries())
        .await
        .unwrap_or_default();
    let descriptions: Vec<&str> = entries
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();
    assert_eq!(descriptions, ["second", "first"]);
}

#[tokio::test]
async fn deleted_or_foreign_api_is_neither_found_nor_updated() {
    let repository = InMemoryApiRepository::new();
    let tenant_id = TenantId::new();
    let deleted = ApiResource::new("api_gone", tenant_id, "Old", None, Some(Utc::now()));
    let Ok(deleted) = deleted else {
        panic!("invalid test api");
    };
    repository.insert_api(deleted).await;
    repository.insert_api(api("api_1", tenant_id)).await;

    let found = repository.find_api(tenant_id, &api_id("api_gone")).await;
    assert!(found.is_ok_and(|api| api.is_none()));

    let foreign = repository.find_api(TenantId::new(), &api_id("api_1")).await;
    assert!(foreign.is_ok_and(|api| api.is_none()));

    let result = repository
        .update_ip_whitelist(update(tenant_id, "api_gone", "nope"))
        .await;
    assert!(result.is_err());

    let entries = repository
        .list_recent_entries(tenant_id, all_entries())
        .await;
    assert!(entries.is_ok_and(|entries| entries.is_empty()));
}
