use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::json;

use super::error::ApiError;
use super::extract::{AuthenticatedUser, JsonPayload};
use super::response::{created, ok_empty};
use super::state::AppState;

pub(crate) async fn post_comment(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(thread_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response, ApiError> {
    let added_comment = state
        .use_cases
        .add_comment
        .execute(&thread_id, &payload, &user.id)
        .await?;
    Ok(created(json!({ "addedComment": added_comment })))
}

pub(crate) async fn delete_comment(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let payload = json!({
        "threadId": thread_id,
        "commentId": comment_id,
        "owner": user.id,
    });
    state.use_cases.delete_comment.execute(&payload).await?;
    Ok(ok_empty())
}
