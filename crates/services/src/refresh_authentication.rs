use std::sync::Arc;

use domains::{AuthenticationRepository, AuthenticationTokenManager, PayloadContext, RefreshTokenPayload, Result};
use serde_json::Value;

pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    /// Returns a fresh access token.
    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> Result<String> {
        let RefreshTokenPayload { refresh_token } =
            RefreshTokenPayload::parse(PayloadContext::RefreshAuthentication, payload)?;

        self.token_manager.verify_refresh_token(&refresh_token)?;
        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;

        let claims = self.token_manager.decode_payload(&refresh_token)?;
        self.token_manager.create_access_token(&claims)
    }
}
