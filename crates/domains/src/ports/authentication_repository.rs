use async_trait::async_trait;

use crate::errors::Result;

/// Storage for refresh tokens that are still valid.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> Result<()>;

    /// Fails with `Invariant` when the token was never issued or is revoked.
    async fn check_availability_token(&self, token: &str) -> Result<()>;

    async fn delete_token(&self, token: &str) -> Result<()>;
}
