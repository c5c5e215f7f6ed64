use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use apiward_application::{ApiRepository, IpWhitelistUpdate};
use apiward_core::{AppError, AppResult, TenantId};
use apiward_domain::{ApiId, ApiResource};

use crate::postgres_audit_log_repository::insert_audit_event;

/// PostgreSQL-backed api repository.
#[derive(Clone)]
pub struct PostgresApiRepository {
    pool: PgPool,
}

impl PostgresApiRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ApiRow {
    id: String,
    tenant_id: uuid::Uuid,
    name: String,
    ip_whitelist: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl ApiRepository for PostgresApiRepository {
    async fn find_api(
        &self,
        tenant_id: TenantId,
        api_id: &ApiId,
    ) -> AppResult<Option<ApiResource>> {
        let row = sqlx::query_as::<_, ApiRow>(
            r#"
            SELECT id, tenant_id, name, ip_whitelist, deleted_at
            FROM apis
            WHERE tenant_id = $1
                AND id = $2
                AND deleted_at IS NULL
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(api_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to find api '{api_id}' in tenant '{tenant_id}': {error}"
            ))
        })?;

        row.map(|row| {
            ApiResource::new(
                row.id,
                TenantId::from_uuid(row.tenant_id),
                row.name,
                row.ip_whitelist,
                row.deleted_at,
            )
            .map_err(|error| {
                AppError::Internal(format!("stored api '{api_id}' is invalid: {error}"))
            })
        })
        .transpose()
    }

    async fn update_ip_whitelist(&self, update: IpWhitelistUpdate) -> AppResult<()> {
        let IpWhitelistUpdate {
            tenant_id,
            api_id,
            ip_whitelist,
            audit_event,
        } = update;

        // Dropping the transaction on any early return rolls both writes back.
        let mut transaction = self.pool.begin().await.map_err(|error| {
            AppError::Internal(format!(
                "failed to begin ip whitelist transaction for api '{api_id}': {error}"
            ))
        })?;

        let updated = sqlx::query(
            r#"
            UPDATE apis
            SET ip_whitelist = $3,
                updated_at = now()
            WHERE tenant_id = $1
                AND id = $2
                AND deleted_at IS NULL
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(api_id.as_str())
        .bind(ip_whitelist.as_deref())
        .execute(&mut *transaction)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to update ip whitelist for api '{api_id}': {error}"
            ))
        })?;

        if updated.rows_affected() != 1 {
            return Err(AppError::Internal(format!(
                "api '{api_id}' in tenant '{tenant_id}' is no longer live"
            )));
        }

        insert_audit_event(&mut transaction, &audit_event).await?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!(
                "failed to commit ip whitelist transaction for api '{api_id}': {error}"
            ))
        })?;

        Ok(())
    }
}
