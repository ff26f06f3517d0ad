//! Shared wiring for handler tests: every port is a mock.

#![allow(dead_code)]

use std::sync::Arc;

use api_adapters::http::{router, AppState, Ports};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use domains::{
    DomainError, MockAuthenticationRepository, MockAuthenticationTokenManager, MockCommentRepository,
    MockPasswordHash, MockThreadRepository, MockUserRepository, TokenPayload,
};
use serde_json::Value;
use tower::ServiceExt;

pub const VALID_TOKEN: &str = "valid-access-token";

pub struct Mocks {
    pub threads: MockThreadRepository,
    pub comments: MockCommentRepository,
    pub users: MockUserRepository,
    pub authentications: MockAuthenticationRepository,
    pub password_hash: MockPasswordHash,
    pub tokens: MockAuthenticationTokenManager,
}

impl Mocks {
    pub fn new() -> Self {
        Self {
            threads: MockThreadRepository::new(),
            comments: MockCommentRepository::new(),
            users: MockUserRepository::new(),
            authentications: MockAuthenticationRepository::new(),
            password_hash: MockPasswordHash::new(),
            tokens: MockAuthenticationTokenManager::new(),
        }
    }

    /// `VALID_TOKEN` identifies user-123; anything else is rejected.
    pub fn signed_in(mut self) -> Self {
        self.tokens.expect_verify_access_token().returning(|token| {
            if token == VALID_TOKEN {
                Ok(TokenPayload {
                    id: "user-123".into(),
                    username: "dicoding".into(),
                })
            } else {
                Err(DomainError::authentication("Invalid token"))
            }
        });
        self
    }

    pub fn into_router(self) -> Router {
        router(AppState::new(Ports {
            thread_repository: Arc::new(self.threads),
            comment_repository: Arc::new(self.comments),
            user_repository: Arc::new(self.users),
            authentication_repository: Arc::new(self.authentications),
            password_hash: Arc::new(self.password_hash),
            token_manager: Arc::new(self.tokens),
        }))
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
