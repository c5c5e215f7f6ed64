use apiward_application::AuditLogEntry;
use apiward_domain::{ApiResource, AuditResource};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
    pub postgres: &'static str,
}

/// Incoming payload for api whitelist updates.
///
/// `null`, a missing field and an empty string all clear the whitelist.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/update-ip-whitelist-request.ts"
)]
pub struct UpdateIpWhitelistRequest {
    #[serde(default)]
    pub ip_whitelist: Option<String>,
}

/// API representation of an api record.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/api-response.ts"
)]
pub struct ApiResponse {
    pub api_id: String,
    pub name: String,
    pub ip_whitelist: Option<Vec<String>>,
}

impl From<ApiResource> for ApiResponse {
    fn from(value: ApiResource) -> Self {
        Self {
            api_id: value.id().to_string(),
            name: value.name().to_string(),
            ip_whitelist: value.ip_whitelist_entries(),
        }
    }
}

/// Resource reference attached to an audit entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/audit-resource-response.ts"
)]
pub struct AuditResourceResponse {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl From<AuditResource> for AuditResourceResponse {
    fn from(value: AuditResource) -> Self {
        Self {
            resource_type: value.resource_type,
            id: value.id,
        }
    }
}

/// API representation of an audit log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/audit-log-entry-response.ts"
)]
pub struct AuditLogEntryResponse {
    pub event_id: String,
    pub actor_type: String,
    pub actor_id: String,
    pub action: String,
    pub description: String,
    pub resources: Vec<AuditResourceResponse>,
    pub location: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: String,
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(value: AuditLogEntry) -> Self {
        Self {
            event_id: value.event_id,
            actor_type: value.actor.kind.as_str().to_owned(),
            actor_id: value.actor.id,
            action: value.action,
            description: value.description,
            resources: value
                .resources
                .into_iter()
                .map(AuditResourceResponse::from)
                .collect(),
            location: value.context.location,
            user_agent: value.context.user_agent,
            created_at: value.created_at,
        }
    }
}
