use std::sync::Arc;

use uuid::Uuid;

/// Produces the random part of a new row id. Repositories add the
/// `thread-`, `comment-` or `user-` prefix.
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

pub fn uuid_id_generator() -> IdGenerator {
    Arc::new(|| Uuid::new_v4().simple().to_string())
}
