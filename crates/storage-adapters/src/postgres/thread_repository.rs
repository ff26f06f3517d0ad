use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedThread, DomainError, NewThread, Result, ThreadDetail, ThreadRepository};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use super::database_error;
use crate::id::IdGenerator;

pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: IdGenerator,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool, id_generator: IdGenerator) -> Self {
        Self { pool, id_generator }
    }
}

fn thread_detail_from_row(row: &PgRow) -> std::result::Result<ThreadDetail, sqlx::Error> {
    Ok(ThreadDetail {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        date: row.try_get("date")?,
        username: row.try_get("username")?,
    })
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[tracing::instrument(skip(self, thread))]
    async fn add_thread(&self, thread: &NewThread, owner: &str) -> Result<AddedThread> {
        let id = format!("thread-{}", (self.id_generator)());

        let row = sqlx::query(
            "INSERT INTO threads (id, title, body, owner, date) VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(owner)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(AddedThread {
            id: row.try_get("id").map_err(database_error)?,
            title: row.try_get("title").map_err(database_error)?,
            owner: row.try_get("owner").map_err(database_error)?,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail> {
        let row = sqlx::query(
            "SELECT threads.id, threads.title, threads.body, threads.date, users.username \
             FROM threads \
             JOIN users ON threads.owner = users.id \
             WHERE threads.id = $1",
        )
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => thread_detail_from_row(&row).map_err(database_error),
            None => Err(DomainError::not_found("thread tidak ditemukan")),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn verify_thread_is_exist(&self, thread_id: &str) -> Result<()> {
        let row = sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("thread tidak ditemukan")),
        }
    }
}
