//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_api_repository;
mod in_memory_workspace_repository;
mod postgres_api_repository;
mod postgres_audit_log_repository;
mod postgres_workspace_repository;

pub use in_memory_api_repository::InMemoryApiRepository;
pub use in_memory_workspace_repository::InMemoryWorkspaceRepository;
pub use postgres_api_repository::PostgresApiRepository;
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_workspace_repository::PostgresWorkspaceRepository;
