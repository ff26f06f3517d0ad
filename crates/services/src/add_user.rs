use std::sync::Arc;

use domains::{PasswordHash, Payload, RegisterUser, RegisteredUser, Result, UserRepository};
use serde_json::Value;

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl AddUserUseCase {
    pub fn new(user_repository: Arc<dyn UserRepository>, password_hash: Arc<dyn PasswordHash>) -> Self {
        Self {
            user_repository,
            password_hash,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> Result<RegisteredUser> {
        let mut user = RegisterUser::from_payload(payload)?;
        self.user_repository.verify_available_username(&user.username).await?;
        user.password = self.password_hash.hash(&user.password).await?;
        self.user_repository.add_user(&user).await
    }
}
