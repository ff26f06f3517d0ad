//! Comment value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payload::{FieldKind, Payload};
use crate::errors::PayloadContext;

/// Shown instead of the content of a soft-deleted comment.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Body of `POST /threads/{threadId}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewComment {
    pub content: String,
}

impl Payload for NewComment {
    const CONTEXT: PayloadContext = PayloadContext::NewComment;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[("content", FieldKind::String)];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl Payload for AddedComment {
    const CONTEXT: PayloadContext = PayloadContext::AddedComment;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::String),
        ("content", FieldKind::String),
        ("owner", FieldKind::String),
    ];
}

/// A stored comment row, delete flag included.
///
/// The row always carries the original content; hiding it behind
/// [`DELETED_COMMENT_PLACEHOLDER`] is the thread view's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

impl Payload for CommentDetail {
    const CONTEXT: PayloadContext = PayloadContext::DetailComment;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::String),
        ("username", FieldKind::String),
        ("date", FieldKind::String),
        ("content", FieldKind::String),
        ("isDeleted", FieldKind::Boolean),
    ];
}

/// A comment as shown to readers of a thread. Has no delete flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

/// Identifies the comment a user wants to soft-delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteComment {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

impl Payload for DeleteComment {
    const CONTEXT: PayloadContext = PayloadContext::DeleteComment;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("threadId", FieldKind::String),
        ("commentId", FieldKind::String),
        ("owner", FieldKind::String),
    ];
}
