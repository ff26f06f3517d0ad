use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{AddedThread, NewThread, ThreadDetail};

/// Persistence contract for threads.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Stores a thread owned by `owner` and returns its new id.
    async fn add_thread(&self, thread: &NewThread, owner: &str) -> Result<AddedThread>;

    /// Fails with `NotFound` when no thread has this id.
    async fn get_thread_by_id(&self, thread_id: &str) -> Result<ThreadDetail>;

    /// Fails with `NotFound` when no thread has this id.
    async fn verify_thread_is_exist(&self, thread_id: &str) -> Result<()>;
}
