use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::warn;

use apiward_application::WorkspaceRepository;
use apiward_core::{AppError, AppResult, TenantId};
use apiward_domain::{Feature, Workspace};

/// PostgreSQL-backed workspace repository.
#[derive(Clone)]
pub struct PostgresWorkspaceRepository {
    pool: PgPool,
}

impl PostgresWorkspaceRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WorkspaceRow {
    name: String,
    features: Vec<String>,
}

#[async_trait]
impl WorkspaceRepository for PostgresWorkspaceRepository {
    async fn find_workspace(&self, tenant_id: TenantId) -> AppResult<Option<Workspace>> {
        let row = sqlx::query_as::<_, WorkspaceRow>(
            r#"
            SELECT name, features
            FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(tenant_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to resolve workspace '{tenant_id}': {error}"))
        })?;

        Ok(row.map(|row| {
            let features = row
                .features
                .iter()
                .filter_map(|value| match Feature::from_str(value) {
                    Ok(feature) => Some(feature),
                    Err(_) => {
                        warn!(
                            tenant_id = %tenant_id,
                            feature = value.as_str(),
                            "ignoring unknown workspace feature"
                        );
                        None
                    }
                })
                .collect::<Vec<_>>();

            Workspace::new(tenant_id, row.name, features)
        }))
    }
}
