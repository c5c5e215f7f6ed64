use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use apiward_application::{AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository};
use apiward_core::{AppError, AppResult, TenantId};
use apiward_domain::{AuditActor, AuditActorKind, AuditContext, AuditResource};

/// PostgreSQL-backed repository for audit log read models.
#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    event_id: uuid::Uuid,
    actor_type: String,
    actor_id: String,
    action: String,
    description: String,
    resources: serde_json::Value,
    location: Option<String>,
    user_agent: Option<String>,
    created_at: String,
}

impl TryFrom<AuditLogRow> for AuditLogEntry {
    type Error = AppError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        let kind = AuditActorKind::from_str(row.actor_type.as_str()).map_err(|error| {
            AppError::Internal(format!(
                "audit entry '{}' has invalid actor type: {error}",
                row.event_id
            ))
        })?;
        let resources =
            serde_json::from_value::<Vec<AuditResource>>(row.resources).map_err(|error| {
                AppError::Internal(format!(
                    "audit entry '{}' has invalid resources payload: {error}",
                    row.event_id
                ))
            })?;

        Ok(Self {
            event_id: row.event_id.to_string(),
            actor: AuditActor {
                kind,
                id: row.actor_id,
            },
            action: row.action,
            description: row.description,
            resources,
            context: AuditContext {
                location: row.location,
                user_agent: row.user_agent,
            },
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn list_recent_entries(
        &self,
        tenant_id: TenantId,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        let query = query.clamped();
        let rows = sqlx::query_as::<_, AuditLogRow>(
            r#"
            SELECT
                id AS event_id,
                actor_type,
                actor_id,
                action,
                description,
                resources,
                location,
                user_agent,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            FROM audit_log_entries
            WHERE tenant_id = $1
                AND ($2::TEXT IS NULL OR action = $2)
            ORDER BY audit_log_entries.created_at DESC, audit_log_entries.id DESC
            LIMIT $3
            OFFSET $4
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(query.action)
        .bind(query.limit as i64)
        .bind(query.offset as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list audit log entries: {error}"))
        })?;

        rows.into_iter().map(AuditLogEntry::try_from).collect()
    }
}

/// Appends one audit event inside the caller's transaction.
pub(crate) async fn insert_audit_event(
    transaction: &mut Transaction<'_, Postgres>,
    event: &AuditEvent,
) -> AppResult<()> {
    let resources = serde_json::to_value(&event.resources).map_err(|error| {
        AppError::Internal(format!("failed to serialize audit resources: {error}"))
    })?;

    sqlx::query(
        r#"
        INSERT INTO audit_log_entries (
            tenant_id,
            actor_type,
            actor_id,
            action,
            description,
            resources,
            location,
            user_agent
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(event.tenant_id.as_uuid())
    .bind(event.actor.kind.as_str())
    .bind(event.actor.id.as_str())
    .bind(event.action.as_str())
    .bind(event.description.as_str())
    .bind(resources)
    .bind(event.context.location.as_deref())
    .bind(event.context.user_agent.as_deref())
    .execute(&mut **transaction)
    .await
    .map_err(|error| AppError::Internal(format!("failed to append audit event: {error}")))?;

    Ok(())
}
