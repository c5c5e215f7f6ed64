use apiward_domain::{ApiResource, AuditAction, AuditActor, AuditResource};

use crate::{AuditEvent, RequestContext};

const ABSENT_VALUE: &str = "null";

/// Builds the audit event for an api whitelist change.
///
/// `api` must be the record as it was read before the change so the
/// description names the value that is being replaced.
#[must_use]
pub fn ip_whitelist_change_event(
    context: &RequestContext,
    api: &ApiResource,
    new_ip_whitelist: Option<&str>,
) -> AuditEvent {
    AuditEvent {
        tenant_id: api.tenant_id(),
        actor: AuditActor::user(context.actor.subject()),
        action: AuditAction::ApiUpdated,
        description: format!(
            "Changed {} IP whitelist from {} to {}",
            api.id(),
            api.ip_whitelist().unwrap_or(ABSENT_VALUE),
            new_ip_whitelist.unwrap_or(ABSENT_VALUE)
        ),
        resources: vec![AuditResource {
            resource_type: "api".to_owned(),
            id: api.id().to_string(),
        }],
        context: context.audit.clone(),
    }
}
