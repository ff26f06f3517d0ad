use axum::http::{Method, StatusCode};
use integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn only_the_owner_can_delete_a_comment() {
    let app = TestApp::new();
    let owner = app.sign_up("dicoding").await;
    let intruder = app.sign_up("johndoe").await;
    let thread_id = app.post_thread(&owner).await;
    let comment_id = app.post_comment(&owner, &thread_id, "sebuah comment").await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/threads/{thread_id}/comments/{comment_id}"),
            Some(&intruder),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "status": "fail", "message": "tidak dapat mengakses resource ini" }));

    let (_, detail) = app.send(Method::GET, &format!("/threads/{thread_id}"), None, None).await;
    assert_eq!(detail["data"]["thread"]["comments"][0]["content"], "sebuah comment");
}

#[tokio::test]
async fn comment_must_belong_to_the_thread_in_the_path() {
    let app = TestApp::new();
    let token = app.sign_up("dicoding").await;
    let thread_a = app.post_thread(&token).await;
    let thread_b = app.post_thread(&token).await;
    let comment_id = app.post_comment(&token, &thread_a, "sebuah comment").await;

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/threads/{thread_b}/comments/{comment_id}"),
            Some(&token),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "comment tidak ditemukan");
}

#[tokio::test]
async fn unknown_threads_are_404() {
    let app = TestApp::new();
    let token = app.sign_up("dicoding").await;

    let (status, body) = app.send(Method::GET, "/threads/thread-404", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "thread tidak ditemukan");

    let (status, _) = app
        .send(
            Method::POST,
            "/threads/thread-404/comments",
            Some(&token),
            Some(json!({ "content": "sebuah comment" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_routes_need_a_valid_access_token() {
    let app = TestApp::new();
    let token = app.sign_up("dicoding").await;
    let (_, refresh) = app.login("dicoding").await;
    let thread_id = app.post_thread(&token).await;

    let (status, body) = app
        .send(Method::POST, "/threads", None, Some(json!({ "title": "a", "body": "b" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing authentication");

    let (status, _) = app
        .send(
            Method::POST,
            &format!("/threads/{thread_id}/comments"),
            Some(&refresh),
            Some(json!({ "content": "sebuah comment" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
