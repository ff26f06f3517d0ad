use async_trait::async_trait;
use domains::{AuthenticationRepository, DomainError, Result};
use sqlx::postgres::PgPool;

use super::database_error;

pub struct PgAuthenticationRepository {
    pool: PgPool,
}

impl PgAuthenticationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthenticationRepository for PgAuthenticationRepository {
    #[tracing::instrument(skip_all)]
    async fn add_token(&self, token: &str) -> Result<()> {
        sqlx::query("INSERT INTO authentications (token) VALUES ($1)")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    async fn check_availability_token(&self, token: &str) -> Result<()> {
        let row = sqlx::query("SELECT token FROM authentications WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::invariant("refresh token tidak ditemukan di database")),
        }
    }

    #[tracing::instrument(skip_all)]
    async fn delete_token(&self, token: &str) -> Result<()> {
        sqlx::query("DELETE FROM authentications WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;
        Ok(())
    }
}
