use async_trait::async_trait;
use chrono::Utc;
use domains::{AddedComment, CommentDetail, CommentRepository, DomainError, NewComment, Result};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;

use super::database_error;
use crate::id::IdGenerator;

pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: IdGenerator,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool, id_generator: IdGenerator) -> Self {
        Self { pool, id_generator }
    }
}

fn comment_detail_from_row(row: &PgRow) -> std::result::Result<CommentDetail, sqlx::Error> {
    Ok(CommentDetail {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        date: row.try_get("date")?,
        content: row.try_get("content")?,
        is_deleted: row.try_get("is_deleted")?,
    })
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[tracing::instrument(skip(self, comment))]
    async fn add_thread_comment(&self, thread_id: &str, comment: &NewComment, owner: &str) -> Result<AddedComment> {
        let id = format!("comment-{}", (self.id_generator)());

        let row = sqlx::query(
            "INSERT INTO comments (id, thread_id, content, owner, date, is_deleted) \
             VALUES ($1, $2, $3, $4, $5, FALSE) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(thread_id)
        .bind(&comment.content)
        .bind(owner)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(AddedComment {
            id: row.try_get("id").map_err(database_error)?,
            content: row.try_get("content").map_err(database_error)?,
            owner: row.try_get("owner").map_err(database_error)?,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn verify_comment_is_exist(&self, comment_id: &str, thread_id: &str) -> Result<()> {
        let row = sqlx::query("SELECT id FROM comments WHERE id = $1 AND thread_id = $2")
            .bind(comment_id)
            .bind(thread_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("comment tidak ditemukan")),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<()> {
        let row = sqlx::query("SELECT id FROM comments WHERE id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::authorization("tidak dapat mengakses resource ini")),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()> {
        let result = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("comment tidak ditemukan"));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentDetail>> {
        let rows = sqlx::query(
            "SELECT comments.id, users.username, comments.date, comments.content, comments.is_deleted \
             FROM comments \
             JOIN users ON comments.owner = users.id \
             WHERE comments.thread_id = $1 \
             ORDER BY comments.date ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter()
            .map(comment_detail_from_row)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(database_error)
    }
}
