use std::sync::Arc;

use domains::{AddedComment, CommentRepository, NewComment, Payload, Result, ThreadRepository};
use serde_json::Value;

pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(comment_repository: Arc<dyn CommentRepository>, thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    /// The thread is checked before anything is written, so a comment can
    /// never point at a missing thread.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, thread_id: &str, payload: &Value, owner: &str) -> Result<AddedComment> {
        self.thread_repository.verify_thread_is_exist(thread_id).await?;
        let comment = NewComment::from_payload(payload)?;
        self.comment_repository.add_thread_comment(thread_id, &comment, owner).await
    }
}
