use async_trait::async_trait;
use domains::{DomainError, RegisterUser, RegisteredUser, Result, UserRepository};
use sqlx::postgres::PgPool;
use sqlx::Row;

use super::database_error;
use crate::id::IdGenerator;

pub struct PgUserRepository {
    pool: PgPool,
    id_generator: IdGenerator,
}

impl PgUserRepository {
    pub fn new(pool: PgPool, id_generator: IdGenerator) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[tracing::instrument(skip_all, fields(username = %user.username))]
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser> {
        let id = format!("user-{}", (self.id_generator)());

        let row = sqlx::query(
            "INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4) \
             RETURNING id, username, fullname",
        )
        .bind(&id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(RegisteredUser {
            id: row.try_get("id").map_err(database_error)?,
            username: row.try_get("username").map_err(database_error)?,
            fullname: row.try_get("fullname").map_err(database_error)?,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn verify_available_username(&self, username: &str) -> Result<()> {
        let row = sqlx::query("SELECT username FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        match row {
            Some(_) => Err(DomainError::invariant("username tidak tersedia")),
            None => Ok(()),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_password_by_username(&self, username: &str) -> Result<String> {
        let row = sqlx::query("SELECT password FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or_else(|| DomainError::invariant("username tidak ditemukan"))?;

        row.try_get("password").map_err(database_error)
    }

    #[tracing::instrument(skip(self))]
    async fn get_id_by_username(&self, username: &str) -> Result<String> {
        let row = sqlx::query("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .ok_or_else(|| DomainError::invariant("user tidak ditemukan"))?;

        row.try_get("id").map_err(database_error)
    }
}
