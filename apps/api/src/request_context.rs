use apiward_application::RequestContext;
use apiward_core::UserIdentity;
use apiward_domain::AuditContext;
use axum::http::HeaderMap;
use axum::http::header::USER_AGENT;

use crate::error::ApiResult;
use crate::state::AppState;

/// Builds the explicit per-request context for application services.
pub async fn request_context(
    state: &AppState,
    user: UserIdentity,
    headers: &HeaderMap,
) -> ApiResult<RequestContext> {
    let workspace = state.authorization_service.resolve_workspace(&user).await?;

    Ok(RequestContext {
        actor: user,
        workspace,
        audit: extract_audit_context(headers),
    })
}

pub fn extract_audit_context(headers: &HeaderMap) -> AuditContext {
    let location = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned);

    AuditContext {
        location,
        user_agent,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};

    use super::extract_audit_context;

    #[test]
    fn first_forwarded_hop_is_the_location() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.5, 10.0.0.1"),
        );
        headers.insert("user-agent", HeaderValue::from_static("Mozilla/5.0"));

        let context = extract_audit_context(&headers);
        assert_eq!(context.location.as_deref(), Some("203.0.113.5"));
        assert_eq!(context.user_agent.as_deref(), Some("Mozilla/5.0"));
    }

    #[test]
    fn missing_headers_leave_context_empty() {
        let context = extract_audit_context(&HeaderMap::new());
        assert!(context.location.is_none());
        assert!(context.user_agent.is_none());
    }
}
