use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use domains::TokenPayload;
use serde_json::Value;

use super::error::ApiError;
use super::state::AppState;

const MISSING_AUTHENTICATION: &str = "Missing authentication";

/// The caller identified by a valid `Authorization: Bearer <access token>`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenPayload);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::unauthenticated(MISSING_AUTHENTICATION))?;

        state
            .token_manager
            .verify_access_token(token)
            .map(Self)
            .map_err(|err| ApiError::unauthenticated(err.to_string()))
    }
}

/// Raw JSON body, left unvalidated for the domain entities to check.
///
/// An empty body becomes `null` so it is reported as a missing property
/// rather than a parse failure.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|err| ApiError::bad_request(err.body_text()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Null));
        }

        serde_json::from_slice(&body)
            .map(Self)
            .map_err(|_| ApiError::bad_request("payload harus berupa JSON yang valid"))
    }
}
