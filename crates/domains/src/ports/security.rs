//! Identity contracts: password hashing and token handling.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::TokenPayload;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait PasswordHash: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String>;

    /// Fails with `Authentication` when `plain` does not match `hashed`.
    async fn compare_password(&self, plain: &str, hashed: &str) -> Result<()>;
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String>;

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String>;

    /// Fails with `Invariant` when the signature or expiry is invalid.
    fn verify_refresh_token(&self, token: &str) -> Result<()>;

    /// Fails with `Authentication` when the token cannot be trusted.
    fn verify_access_token(&self, token: &str) -> Result<TokenPayload>;

    /// Reads the claims of a refresh token that already passed
    /// [`Self::verify_refresh_token`].
    fn decode_payload(&self, token: &str) -> Result<TokenPayload>;
}
