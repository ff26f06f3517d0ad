use axum::extract::State;
use axum::response::Response;
use serde_json::json;

use super::error::ApiError;
use super::extract::JsonPayload;
use super::response::created;
use super::state::AppState;

pub(crate) async fn post_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response, ApiError> {
    let added_user = state.use_cases.add_user.execute(&payload).await?;
    Ok(created(json!({ "addedUser": added_user })))
}
