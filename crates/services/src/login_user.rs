use std::sync::Arc;

use domains::{
    AuthenticationRepository, AuthenticationTokenManager, NewAuth, PasswordHash, Payload, Result, TokenPayload,
    UserLogin, UserRepository,
};
use serde_json::Value;

pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
    password_hash: Arc<dyn PasswordHash>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
        password_hash: Arc<dyn PasswordHash>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            token_manager,
            password_hash,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn execute(&self, payload: &Value) -> Result<NewAuth> {
        let UserLogin { username, password } = UserLogin::from_payload(payload)?;

        let hashed = self.user_repository.get_password_by_username(&username).await?;
        self.password_hash.compare_password(&password, &hashed).await?;

        let id = self.user_repository.get_id_by_username(&username).await?;
        let claims = TokenPayload { id, username };

        let auth = NewAuth {
            access_token: self.token_manager.create_access_token(&claims)?,
            refresh_token: self.token_manager.create_refresh_token(&claims)?,
        };
        self.authentication_repository.add_token(&auth.refresh_token).await?;

        tracing::info!(user_id = %claims.id, "user logged in");
        Ok(auth)
    }
}

#[cfg(test)]
mod tests {
    use domains::{
        DomainError, MockAuthenticationRepository, MockAuthenticationTokenManager, MockPasswordHash,
        MockUserRepository,
    };
    use mockall::predicate::eq;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn issues_and_stores_tokens() {
        let mut users = MockUserRepository::new();
        let mut auths = MockAuthenticationRepository::new();
        let mut tokens = MockAuthenticationTokenManager::new();
        let mut hasher = MockPasswordHash::new();

        users
            .expect_get_password_by_username()
            .with(eq("dicoding"))
            .returning(|_| Ok("encrypted_password".into()));
        hasher
            .expect_compare_password()
            .with(eq("secret"), eq("encrypted_password"))
            .times(1)
            .returning(|_, _| Ok(()));
        users
            .expect_get_id_by_username()
            .with(eq("dicoding"))
            .returning(|_| Ok("user-123".into()));
        tokens
            .expect_create_access_token()
            .withf(|claims| claims.id == "user-123" && claims.username == "dicoding")
            .returning(|_| Ok("access_token".into()));
        tokens
            .expect_create_refresh_token()
            .returning(|_| Ok("refresh_token".into()));
        auths
            .expect_add_token()
            .with(eq("refresh_token"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LoginUserUseCase::new(Arc::new(users), Arc::new(auths), Arc::new(tokens), Arc::new(hasher));
        let auth = use_case
            .execute(&json!({ "username": "dicoding", "password": "secret" }))
            .await
            .unwrap();

        assert_eq!(
            auth,
            NewAuth {
                access_token: "access_token".into(),
                refresh_token: "refresh_token".into(),
            }
        );
    }

    #[tokio::test]
    async fn wrong_password_issues_nothing() {
        let mut users = MockUserRepository::new();
        let mut auths = MockAuthenticationRepository::new();
        let mut tokens = MockAuthenticationTokenManager::new();
        let mut hasher = MockPasswordHash::new();

        users
            .expect_get_password_by_username()
            .returning(|_| Ok("encrypted_password".into()));
        hasher
            .expect_compare_password()
            .returning(|_, _| Err(DomainError::authentication("kredensial yang Anda masukkan salah")));
        tokens.expect_create_access_token().never();
        auths.expect_add_token().never();

        let use_case = LoginUserUseCase::new(Arc::new(users), Arc::new(auths), Arc::new(tokens), Arc::new(hasher));
        let err = use_case
            .execute(&json!({ "username": "dicoding", "password": "wrong" }))
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::authentication("kredensial yang Anda masukkan salah"));
    }
}
