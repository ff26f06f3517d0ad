use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

pub(crate) fn created(data: Value) -> Response {
    (StatusCode::CREATED, Json(json!({ "status": "success", "data": data }))).into_response()
}

pub(crate) fn ok(data: Value) -> Response {
    (StatusCode::OK, Json(json!({ "status": "success", "data": data }))).into_response()
}

pub(crate) fn ok_empty() -> Response {
    (StatusCode::OK, Json(json!({ "status": "success" }))).into_response()
}

pub(crate) async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "fail", "message": "resource tidak ditemukan" })),
    )
        .into_response()
}
