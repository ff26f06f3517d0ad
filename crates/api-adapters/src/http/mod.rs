//! # HTTP layer
//!
//! axum routing for the forum API. Handlers are thin: pull the raw payload
//! and the authenticated user out of the request, hand both to a use case
//! and wrap the result in the `{status, data}` envelope.

mod authentications;
mod comments;
mod error;
mod extract;
pub mod middleware;
mod response;
mod state;
mod threads;
mod users;

use axum::routing::{delete, get, post};
use axum::Router;

pub use error::ApiError;
pub use extract::{AuthenticatedUser, JsonPayload};
pub use state::{AppState, Ports};

/// Builds the route table.
///
/// Layers (tracing, CORS) are added by the binary so tests can drive the
/// bare router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", post(users::post_user))
        .route(
            "/authentications",
            post(authentications::post_authentication)
                .put(authentications::put_authentication)
                .delete(authentications::delete_authentication),
        )
        .route("/threads", post(threads::post_thread))
        .route("/threads/{thread_id}", get(threads::get_thread_detail))
        .route("/threads/{thread_id}/comments", post(comments::post_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(comments::delete_comment),
        )
        .fallback(response::not_found)
        .with_state(state)
}
