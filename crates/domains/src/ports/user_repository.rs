use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{RegisterUser, RegisteredUser};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// `user.password` must already be hashed.
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser>;

    /// Fails with `Invariant` when the username is taken.
    async fn verify_available_username(&self, username: &str) -> Result<()>;

    /// Fails with `Invariant` when the username is unknown.
    async fn get_password_by_username(&self, username: &str) -> Result<String>;

    async fn get_id_by_username(&self, username: &str) -> Result<String>;
}
