use std::sync::Arc;

use domains::{CommentRepository, DeleteComment, Payload, Result};
use serde_json::Value;

pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    /// Existence, then ownership, then the soft delete. Each step assumes the
    /// previous ones passed, so they are never run concurrently.
    ///
    /// Nothing holds a lock between the ownership check and the update.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let DeleteComment {
            thread_id,
            comment_id,
            owner,
        } = DeleteComment::from_payload(payload)?;

        self.comment_repository.verify_comment_is_exist(&comment_id, &thread_id).await?;
        self.comment_repository.verify_comment_access(&comment_id, &owner).await?;
        self.comment_repository.delete_comment_by_id(&comment_id).await
    }
}
