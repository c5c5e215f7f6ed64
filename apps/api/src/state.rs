use apiward_application::{ApiService, AuditLogService, AuthorizationService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub api_service: ApiService,
    pub audit_log_service: AuditLogService,
    pub authorization_service: AuthorizationService,
    pub postgres_pool: PgPool,
    pub frontend_url: String,
}
