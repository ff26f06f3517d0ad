//! HS256 implementation of `AuthenticationTokenManager`.
//!
//! Access and refresh tokens are signed with different keys so one can never
//! stand in for the other.

use std::time::Duration;

use chrono::Utc;
use domains::{AuthenticationTokenManager, DomainError, Result, TokenPayload};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    username: String,
    iat: i64,
    exp: i64,
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    age: Duration,
}

impl SigningKeys {
    fn new(secret: &[u8], age: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            age,
        }
    }
}

pub struct JwtTokenManager {
    access: SigningKeys,
    refresh: SigningKeys,
    validation: Validation,
}

impl JwtTokenManager {
    pub fn new(access_secret: &[u8], refresh_secret: &[u8], access_age: Duration, refresh_age: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            access: SigningKeys::new(access_secret, access_age),
            refresh: SigningKeys::new(refresh_secret, refresh_age),
            validation,
        }
    }

    fn sign(&self, keys: &SigningKeys, payload: &TokenPayload) -> Result<String> {
        let iat = Utc::now().timestamp();
        let age = i64::try_from(keys.age.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            id: payload.id.clone(),
            username: payload.username.clone(),
            iat,
            exp: iat.saturating_add(age),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding).map_err(|err| {
            tracing::error!(error = %err, "token signing failed");
            DomainError::internal("token signing failed")
        })
    }

    fn claims(&self, keys: &SigningKeys, token: &str) -> std::result::Result<TokenPayload, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &keys.decoding, &self.validation)?;
        Ok(TokenPayload {
            id: data.claims.id,
            username: data.claims.username,
        })
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String> {
        self.sign(&self.access, payload)
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String> {
        self.sign(&self.refresh, payload)
    }

    fn verify_refresh_token(&self, token: &str) -> Result<()> {
        self.claims(&self.refresh, token)
            .map(|_| ())
            .map_err(|_| DomainError::invariant("refresh token tidak valid"))
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenPayload> {
        self.claims(&self.access, token).map_err(|err| {
            tracing::debug!(error = %err, "access token rejected");
            DomainError::authentication("Invalid token")
        })
    }

    fn decode_payload(&self, token: &str) -> Result<TokenPayload> {
        self.claims(&self.refresh, token)
            .map_err(|_| DomainError::invariant("refresh token tidak valid"))
    }
}
