use std::sync::Arc;
use std::time::Duration;

use api_adapters::http::{router, AppState, Ports};
use auth_adapters::{Argon2PasswordHash, JwtTokenManager};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::InMemoryStore;

/// The full application over an `InMemoryStore`.
pub struct TestApp {
    router: Router,
    pub store: InMemoryStore,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        let shared = Arc::new(store.clone());
        let state = AppState::new(Ports {
            thread_repository: shared.clone(),
            comment_repository: shared.clone(),
            user_repository: shared.clone(),
            authentication_repository: shared,
            password_hash: Arc::new(Argon2PasswordHash::new()),
            token_manager: Arc::new(JwtTokenManager::new(
                b"integration-access-key",
                b"integration-refresh-key",
                Duration::from_secs(3000),
                Duration::from_secs(86_400),
            )),
        });

        Self {
            router: router(state),
            store,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self.router.clone().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }

    /// Registers `username` with password `secret` and returns the user id.
    pub async fn register(&self, username: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/users",
                None,
                Some(json!({ "username": username, "password": "secret", "fullname": "Dicoding Indonesia" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["data"]["addedUser"]["id"].as_str().unwrap_or_default().to_string()
    }

    /// Logs in and returns `(access_token, refresh_token)`.
    pub async fn login(&self, username: &str) -> (String, String) {
        let (status, body) = self
            .send(
                Method::POST,
                "/authentications",
                None,
                Some(json!({ "username": username, "password": "secret" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "login failed: {body}");
        let token = |key: &str| body["data"][key].as_str().unwrap_or_default().to_string();
        (token("accessToken"), token("refreshToken"))
    }

    /// Registers and logs in, returning the access token.
    pub async fn sign_up(&self, username: &str) -> String {
        self.register(username).await;
        self.login(username).await.0
    }

    pub async fn post_thread(&self, token: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/threads",
                Some(token),
                Some(json!({ "title": "sebuah thread", "body": "sebuah body thread" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "post thread failed: {body}");
        body["data"]["addedThread"]["id"].as_str().unwrap_or_default().to_string()
    }

    pub async fn post_comment(&self, token: &str, thread_id: &str, content: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                &format!("/threads/{thread_id}/comments"),
                Some(token),
                Some(json!({ "content": content })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "post comment failed: {body}");
        body["data"]["addedComment"]["id"].as_str().unwrap_or_default().to_string()
    }
}
