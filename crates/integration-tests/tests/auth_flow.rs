use axum::http::{Method, StatusCode};
use integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/users",
            None,
            Some(json!({ "username": "dicoding", "password": "secret", "fullname": "Dicoding Indonesia" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "status": "fail", "message": "username tidak tersedia" }));
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/authentications",
            None,
            Some(json!({ "username": "dicoding", "password": "wrong" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "kredensial yang Anda masukkan salah");
    assert_eq!(app.store.token_count().await, 0);
}

#[tokio::test]
async fn unknown_username_cannot_log_in() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Method::POST,
            "/authentications",
            None,
            Some(json!({ "username": "nobody", "password": "secret" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "username tidak ditemukan");
}

#[tokio::test]
async fn refreshed_access_token_works() {
    let app = TestApp::new();
    app.register("dicoding").await;
    let (_, refresh) = app.login("dicoding").await;

    let (status, body) = app
        .send(Method::PUT, "/authentications", None, Some(json!({ "refreshToken": refresh })))
        .await;
    assert_eq!(status, StatusCode::OK);

    let access = body["data"]["accessToken"].as_str().unwrap().to_string();
    app.post_thread(&access).await;
}

#[tokio::test]
async fn logout_revokes_the_refresh_token() {
    let app = TestApp::new();
    app.register("dicoding").await;
    let (_, refresh) = app.login("dicoding").await;

    let (status, _) = app
        .send(Method::DELETE, "/authentications", None, Some(json!({ "refreshToken": refresh })))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(Method::PUT, "/authentications", None, Some(json!({ "refreshToken": refresh })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "refresh token tidak ditemukan di database");
}

#[tokio::test]
async fn access_token_cannot_refresh() {
    let app = TestApp::new();
    let access = app.sign_up("dicoding").await;

    let (status, body) = app
        .send(Method::PUT, "/authentications", None, Some(json!({ "refreshToken": access })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "refresh token tidak valid");
}
