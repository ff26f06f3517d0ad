use std::sync::Arc;

use domains::{
    CommentDetail, CommentRepository, Result, ThreadComment, ThreadDetailView, ThreadRepository,
    DELETED_COMMENT_PLACEHOLDER,
};

pub struct ThreadDetailUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl ThreadDetailUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>, comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// The two reads do not depend on each other and are awaited together.
    /// Comments keep the order the repository returned them in.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetailView> {
        let (thread, rows) = tokio::try_join!(
            self.thread_repository.get_thread_by_id(thread_id),
            self.comment_repository.get_comments_by_thread_id(thread_id),
        )?;

        Ok(ThreadDetailView {
            thread,
            comments: rows.into_iter().map(display_comment).collect(),
        })
    }
}

fn display_comment(row: CommentDetail) -> ThreadComment {
    let content = if row.is_deleted {
        DELETED_COMMENT_PLACEHOLDER.to_string()
    } else {
        row.content
    };

    ThreadComment {
        id: row.id,
        username: row.username,
        date: row.date,
        content,
    }
}
