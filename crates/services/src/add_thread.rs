use std::sync::Arc;

use domains::{AddedThread, NewThread, Payload, Result, ThreadRepository};
use serde_json::Value;

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value, owner: &str) -> Result<AddedThread> {
        let thread = NewThread::from_payload(payload)?;
        self.thread_repository.add_thread(&thread, owner).await
    }
}

#[cfg(test)]
mod tests {
    use domains::{DomainError, MockThreadRepository, PayloadContext};
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn persists_validated_thread_for_owner() {
        let mut repo = MockThreadRepository::new();
        repo.expect_add_thread()
            .withf(|thread, owner| {
                *thread
                    == NewThread {
                        title: "a thread".into(),
                        body: "a thread body".into(),
                    }
                    && owner == "user-345"
            })
            .times(1)
            .returning(|thread, owner| {
                Ok(AddedThread {
                    id: "thread-123".into(),
                    title: thread.title.clone(),
                    owner: owner.to_string(),
                })
            });

        let use_case = AddThreadUseCase::new(Arc::new(repo));
        let added = use_case
            .execute(&json!({ "title": "a thread", "body": "a thread body" }), "user-345")
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedThread {
                id: "thread-123".into(),
                title: "a thread".into(),
                owner: "user-345".into(),
            }
        );
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_repository() {
        let mut repo = MockThreadRepository::new();
        repo.expect_add_thread().never();

        let use_case = AddThreadUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(&json!({ "title": "a thread", "body": 123 }), "user-345")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::InvalidDataType(PayloadContext::NewThread));
    }
}
