//! # PostgreSQL Implementation
//!
//! Translates port calls into parameterized SQL and maps rows back into the
//! domain models. Every repository shares one `PgPool`.

mod authentication_repository;
mod comment_repository;
mod thread_repository;
mod user_repository;

pub use authentication_repository::PgAuthenticationRepository;
pub use comment_repository::PgCommentRepository;
pub use thread_repository::PgThreadRepository;
pub use user_repository::PgUserRepository;

use domains::DomainError;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Schema for users, authentications, threads and comments.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn connect(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(max_connections).connect(url).await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Driver errors are logged here and never shown to clients.
pub(crate) fn database_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "database query failed");
    DomainError::internal("database query failed")
}
