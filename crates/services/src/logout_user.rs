use std::sync::Arc;

use domains::{AuthenticationRepository, PayloadContext, RefreshTokenPayload, Result};
use serde_json::Value;

pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> Result<()> {
        let RefreshTokenPayload { refresh_token } =
            RefreshTokenPayload::parse(PayloadContext::DeleteAuthentication, payload)?;

        self.authentication_repository
            .check_availability_token(&refresh_token)
            .await?;
        self.authentication_repository.delete_token(&refresh_token).await
    }
}
