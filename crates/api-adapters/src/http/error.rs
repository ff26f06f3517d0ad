use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::DomainError;
use serde_json::json;

use crate::translator::translate;

const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Everything a handler can fail with, already shaped for the wire.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    /// `{status: "fail", message}` with a 4xx status.
    Client { status: StatusCode, message: String },
    /// Rejected by the auth extractor before any handler ran.
    Unauthenticated(String),
    /// Generic 500; the cause is logged, never sent.
    Server,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Client {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let (status, message) = match translate(error) {
            DomainError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            DomainError::Authentication(message) => (StatusCode::UNAUTHORIZED, message),
            DomainError::Authorization(message) => (StatusCode::FORBIDDEN, message),
            DomainError::Internal(cause) => {
                tracing::error!(%cause, "request failed");
                return Self::Server;
            }
            other => (StatusCode::BAD_REQUEST, other.to_string()),
        };
        Self::Client { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Client { status, message } => {
                (status, Json(json!({ "status": "fail", "message": message }))).into_response()
            }
            Self::Unauthenticated(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "statusCode": 401,
                    "error": "Unauthorized",
                    "message": message,
                })),
            )
                .into_response(),
            Self::Server => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": SERVER_FAILURE_MESSAGE })),
            )
                .into_response(),
        }
    }
}
