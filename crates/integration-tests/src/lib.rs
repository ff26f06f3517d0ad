//! # integration-tests
//!
//! An in-memory implementation of every repository port plus a harness
//! that drives the real router with the real password hasher and token
//! manager. Nothing here needs a database.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::{
    AddedComment, AddedThread, AuthenticationRepository, CommentDetail, CommentRepository, DomainError, NewComment,
    NewThread, RegisterUser, RegisteredUser, Result, ThreadDetail, ThreadRepository, UserRepository,
};
use storage_adapters::IdGenerator;
use tokio::sync::RwLock;

#[cfg(feature = "web-axum")]
mod harness;
#[cfg(feature = "web-axum")]
pub use harness::TestApp;

struct UserRow {
    id: String,
    username: String,
    password: String,
}

struct ThreadRow {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

struct CommentRow {
    id: String,
    thread_id: String,
    content: String,
    owner: String,
    date: DateTime<Utc>,
    is_deleted: bool,
}

#[derive(Default)]
struct Tables {
    users: Vec<UserRow>,
    tokens: HashSet<String>,
    threads: Vec<ThreadRow>,
    comments: Vec<CommentRow>,
}

impl Tables {
    fn username_of(&self, user_id: &str) -> String {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.username.clone())
            .unwrap_or_default()
    }
}

/// Backs all four repository ports with one set of tables, mirroring the
/// error messages of the PostgreSQL adapters.
#[derive(Clone)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    next_id: IdGenerator,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Ids are sequential (`thread-1`, `comment-2`, ...) so tests can
    /// predict them.
    pub fn new() -> Self {
        let counter = Arc::new(AtomicU64::new(0));
        Self::with_id_generator(Arc::new(move || (counter.fetch_add(1, Ordering::Relaxed) + 1).to_string()))
    }

    pub fn with_id_generator(next_id: IdGenerator) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            next_id,
        }
    }

    pub async fn token_count(&self) -> usize {
        self.tables.read().await.tokens.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser> {
        let id = format!("user-{}", (self.next_id)());
        self.tables.write().await.users.push(UserRow {
            id: id.clone(),
            username: user.username.clone(),
            password: user.password.clone(),
        });
        Ok(RegisteredUser {
            id,
            username: user.username.clone(),
            fullname: user.fullname.clone(),
        })
    }

    async fn verify_available_username(&self, username: &str) -> Result<()> {
        let tables = self.tables.read().await;
        if tables.users.iter().any(|user| user.username == username) {
            return Err(DomainError::invariant("username tidak tersedia"));
        }
        Ok(())
    }

    async fn get_password_by_username(&self, username: &str) -> Result<String> {
        let tables = self.tables.read().await;
        tables
            .users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.password.clone())
            .ok_or_else(|| DomainError::invariant("username tidak ditemukan"))
    }

    async fn get_id_by_username(&self, username: &str) -> Result<String> {
        let tables = self.tables.read().await;
        tables
            .users
            .iter()
            .find(|user| user.username == username)
            .map(|user| user.id.clone())
            .ok_or_else(|| DomainError::invariant("user tidak ditemukan"))
    }
}

#[async_trait]
impl AuthenticationRepository for InMemoryStore {
    async fn add_token(&self, token: &str) -> Result<()> {
        self.tables.write().await.tokens.insert(token.to_string());
        Ok(())
    }

    async fn check_availability_token(&self, token: &str) -> Result<()> {
        if self.tables.read().await.tokens.contains(token) {
            Ok(())
        } else {
            Err(DomainError::invariant("refresh token tidak ditemukan di database"))
        }
    }

    async fn delete_token(&self, token: &str) -> Result<()> {
        self.tables.write().await.tokens.remove(token);
        Ok(())
    }
}

#[async_trait]
impl ThreadRepository for InMemoryStore {
    async fn add_thread(&self, thread: &NewThread, owner: &str) -> Result<AddedThread> {
        let id = format!("thread-{}", (self.next_id)());
        self.tables.write().await.threads.push(ThreadRow {
            id: id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            owner: owner.to_string(),
            date: Utc::now(),
        });
        Ok(AddedThread {
            id,
            title: thread.title.clone(),
            owner: owner.to_string(),
        })
    }

    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail> {
        let tables = self.tables.read().await;
        let row = tables
            .threads
            .iter()
            .find(|thread| thread.id == thread_id)
            .ok_or_else(|| DomainError::not_found("thread tidak ditemukan"))?;

        Ok(ThreadDetail {
            id: row.id.clone(),
            title: row.title.clone(),
            body: row.body.clone(),
            date: row.date,
            username: tables.username_of(&row.owner),
        })
    }

    async fn verify_thread_is_exist(&self, thread_id: &str) -> Result<()> {
        let tables = self.tables.read().await;
        if tables.threads.iter().any(|thread| thread.id == thread_id) {
            Ok(())
        } else {
            Err(DomainError::not_found("thread tidak ditemukan"))
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn add_thread_comment(&self, thread_id: &str, comment: &NewComment, owner: &str) -> Result<AddedComment> {
        let id = format!("comment-{}", (self.next_id)());
        self.tables.write().await.comments.push(CommentRow {
            id: id.clone(),
            thread_id: thread_id.to_string(),
            content: comment.content.clone(),
            owner: owner.to_string(),
            date: Utc::now(),
            is_deleted: false,
        });
        Ok(AddedComment {
            id,
            content: comment.content.clone(),
            owner: owner.to_string(),
        })
    }

    async fn verify_comment_is_exist(&self, comment_id: &str, thread_id: &str) -> Result<()> {
        let tables = self.tables.read().await;
        let found = tables
            .comments
            .iter()
            .any(|comment| comment.id == comment_id && comment.thread_id == thread_id);
        if found {
            Ok(())
        } else {
            Err(DomainError::not_found("comment tidak ditemukan"))
        }
    }

    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<()> {
        let tables = self.tables.read().await;
        let comment = tables
            .comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| DomainError::not_found("comment tidak ditemukan"))?;

        if comment.owner == owner {
            Ok(())
        } else {
            Err(DomainError::authorization("tidak dapat mengakses resource ini"))
        }
    }

    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()> {
        let mut tables = self.tables.write().await;
        let comment = tables
            .comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| DomainError::not_found("comment tidak ditemukan"))?;
        comment.is_deleted = true;
        Ok(())
    }

    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentDetail>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<_> = tables
            .comments
            .iter()
            .filter(|comment| comment.thread_id == thread_id)
            .map(|comment| CommentDetail {
                id: comment.id.clone(),
                username: tables.username_of(&comment.owner),
                date: comment.date,
                content: comment.content.clone(),
                is_deleted: comment.is_deleted,
            })
            .collect();
        rows.sort_by_key(|comment| comment.date);
        Ok(rows)
    }
}
