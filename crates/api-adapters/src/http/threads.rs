use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;

use super::error::ApiError;
use super::extract::{AuthenticatedUser, JsonPayload};
use super::response::{created, ok};
use super::state::AppState;

/// `POST /threads`
pub(crate) async fn post_thread(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    JsonPayload(payload): JsonPayload,
) -> Result<Response, ApiError> {
    let added_thread = state.use_cases.add_thread.execute(&payload, &user.id).await?;
    Ok(created(json!({ "addedThread": added_thread })))
}

/// `GET /threads/{thread_id}`, public.
pub(crate) async fn get_thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Response, ApiError> {
    let thread = state.use_cases.thread_detail.execute(&thread_id).await?;
    Ok(ok(json!({ "thread": thread })))
}
