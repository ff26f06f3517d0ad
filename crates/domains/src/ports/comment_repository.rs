use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{AddedComment, CommentDetail, NewComment};

/// Persistence contract for comments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_thread_comment(&self, thread_id: &str, comment: &NewComment, owner: &str) -> Result<AddedComment>;

    /// Fails with `NotFound` unless the comment lives under `thread_id`.
    async fn verify_comment_is_exist(&self, comment_id: &str, thread_id: &str) -> Result<()>;

    /// Fails with `Authorization` unless `owner` wrote the comment.
    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<()>;

    /// Flips the delete flag. The row itself is kept.
    async fn delete_comment_by_id(&self, comment_id: &str) -> Result<()>;

    /// Every comment of the thread, deleted ones included, oldest first.
    async fn get_comments_by_thread_id(&self, thread_id: &str) -> Result<Vec<CommentDetail>>;
}
