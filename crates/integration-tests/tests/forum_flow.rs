use axum::http::{Method, StatusCode};
use integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn thread_with_comments_and_a_soft_delete() {
    let app = TestApp::new();
    let author = app.sign_up("dicoding").await;
    let commenter = app.sign_up("johndoe").await;

    let thread_id = app.post_thread(&author).await;
    assert!(thread_id.starts_with("thread-"));

    let first = app.post_comment(&commenter, &thread_id, "sebuah comment").await;
    let second = app.post_comment(&author, &thread_id, "komentar yang disesali").await;
    assert!(first.starts_with("comment-"));

    let (status, body) = app
        .send(
            Method::DELETE,
            &format!("/threads/{thread_id}/comments/{second}"),
            Some(&author),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));

    let (status, body) = app.send(Method::GET, &format!("/threads/{thread_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);

    let thread = &body["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");

    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "johndoe");
    assert_eq!(comments[0]["content"], "sebuah comment");
    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["username"], "dicoding");
    assert_eq!(comments[1]["content"], "**komentar telah dihapus**");
}

#[tokio::test]
async fn thread_without_comments_has_empty_list() {
    let app = TestApp::new();
    let token = app.sign_up("dicoding").await;
    let thread_id = app.post_thread(&token).await;

    let (status, body) = app.send(Method::GET, &format!("/threads/{thread_id}"), None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["thread"]["comments"], json!([]));
}

#[tokio::test]
async fn deleting_twice_still_succeeds() {
    let app = TestApp::new();
    let token = app.sign_up("dicoding").await;
    let thread_id = app.post_thread(&token).await;
    let comment_id = app.post_comment(&token, &thread_id, "sebuah comment").await;
    let uri = format!("/threads/{thread_id}/comments/{comment_id}");

    let (first, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;
    let (second, _) = app.send(Method::DELETE, &uri, Some(&token), None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
}

#[tokio::test]
async fn invalid_thread_payloads_are_rejected() {
    let app = TestApp::new();
    let token = app.sign_up("dicoding").await;

    let (status, body) = app
        .send(Method::POST, "/threads", Some(&token), Some(json!({ "title": "", "body": "x" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "data properti thread tidak lengkap");

    let (status, body) = app
        .send(Method::POST, "/threads", Some(&token), Some(json!({ "title": "x", "body": 42 })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "tipe data thread tidak valid");
}
