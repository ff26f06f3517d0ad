mod support;

use axum::http::{Method, StatusCode};
use domains::{AddedComment, DomainError};
use mockall::predicate::eq;
use mockall::Sequence;
use serde_json::json;
use support::{request, send, Mocks, VALID_TOKEN};

#[tokio::test]
async fn post_comment_returns_added_comment() {
    let mut mocks = Mocks::new().signed_in();
    mocks
        .threads
        .expect_verify_thread_is_exist()
        .with(eq("thread-123"))
        .times(1)
        .returning(|_| Ok(()));
    mocks
        .comments
        .expect_add_thread_comment()
        .withf(|thread_id, comment, owner| {
            thread_id == "thread-123" && comment.content == "sebuah comment" && owner == "user-123"
        })
        .times(1)
        .returning(|_, comment, owner| {
            Ok(AddedComment {
                id: "comment-123".into(),
                content: comment.content.clone(),
                owner: owner.to_string(),
            })
        });

    let (status, body) = send(
        mocks.into_router(),
        request(
            Method::POST,
            "/threads/thread-123/comments",
            Some(VALID_TOKEN),
            Some(json!({ "content": "sebuah comment" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "data": {
                "addedComment": { "id": "comment-123", "content": "sebuah comment", "owner": "user-123" }
            }
        })
    );
}

#[tokio::test]
async fn comment_on_unknown_thread_is_404() {
    let mut mocks = Mocks::new().signed_in();
    mocks
        .threads
        .expect_verify_thread_is_exist()
        .returning(|_| Err(DomainError::not_found("thread tidak ditemukan")));
    mocks.comments.expect_add_thread_comment().never();

    let (status, body) = send(
        mocks.into_router(),
        request(
            Method::POST,
            "/threads/thread-404/comments",
            Some(VALID_TOKEN),
            Some(json!({ "content": "sebuah comment" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "thread tidak ditemukan");
}

#[tokio::test]
async fn comment_with_wrong_type_is_400() {
    let mut mocks = Mocks::new().signed_in();
    mocks.threads.expect_verify_thread_is_exist().returning(|_| Ok(()));
    mocks.comments.expect_add_thread_comment().never();

    let (status, body) = send(
        mocks.into_router(),
        request(
            Method::POST,
            "/threads/thread-123/comments",
            Some(VALID_TOKEN),
            Some(json!({ "content": ["not", "a", "string"] })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "tipe data thread comment tidak valid");
}

#[tokio::test]
async fn delete_comment_checks_then_deletes() {
    let mut seq = Sequence::new();
    let mut mocks = Mocks::new().signed_in();
    mocks
        .comments
        .expect_verify_comment_is_exist()
        .with(eq("comment-123"), eq("thread-123"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    mocks
        .comments
        .expect_verify_comment_access()
        .with(eq("comment-123"), eq("user-123"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));
    mocks
        .comments
        .expect_delete_comment_by_id()
        .with(eq("comment-123"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let (status, body) = send(
        mocks.into_router(),
        request(
            Method::DELETE,
            "/threads/thread-123/comments/comment-123",
            Some(VALID_TOKEN),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success" }));
}

#[tokio::test]
async fn deleting_someone_elses_comment_is_403() {
    let mut mocks = Mocks::new().signed_in();
    mocks.comments.expect_verify_comment_is_exist().returning(|_, _| Ok(()));
    mocks
        .comments
        .expect_verify_comment_access()
        .returning(|_, _| Err(DomainError::authorization("tidak dapat mengakses resource ini")));
    mocks.comments.expect_delete_comment_by_id().never();

    let (status, body) = send(
        mocks.into_router(),
        request(
            Method::DELETE,
            "/threads/thread-123/comments/comment-123",
            Some(VALID_TOKEN),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "status": "fail", "message": "tidak dapat mengakses resource ini" }));
}

#[tokio::test]
async fn deleting_missing_comment_is_404() {
    let mut mocks = Mocks::new().signed_in();
    mocks
        .comments
        .expect_verify_comment_is_exist()
        .returning(|_, _| Err(DomainError::not_found("comment tidak ditemukan")));
    mocks.comments.expect_verify_comment_access().never();
    mocks.comments.expect_delete_comment_by_id().never();

    let (status, _) = send(
        mocks.into_router(),
        request(
            Method::DELETE,
            "/threads/thread-123/comments/comment-404",
            Some(VALID_TOKEN),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_without_token_is_rejected() {
    let mut mocks = Mocks::new();
    mocks.comments.expect_verify_comment_is_exist().never();

    let (status, body) = send(
        mocks.into_router(),
        request(Method::DELETE, "/threads/thread-123/comments/comment-123", None, None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}
