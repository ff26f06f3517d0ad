//! Login, token refresh and logout. None of these need an access token.

use axum::extract::State;
use axum::response::Response;
use serde_json::json;

use super::error::ApiError;
use super::extract::JsonPayload;
use super::response::{created, ok, ok_empty};
use super::state::AppState;

pub(crate) async fn post_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response, ApiError> {
    let tokens = state.use_cases.login_user.execute(&payload).await?;
    Ok(created(json!(tokens)))
}

pub(crate) async fn put_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response, ApiError> {
    let access_token = state.use_cases.refresh_authentication.execute(&payload).await?;
    Ok(ok(json!({ "accessToken": access_token })))
}

pub(crate) async fn delete_authentication(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response, ApiError> {
    state.use_cases.logout_user.execute(&payload).await?;
    Ok(ok_empty())
}
