//! Thread value objects: the incoming payload, the persisted summary and the
//! detail row read back for the thread view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comment::ThreadComment;
use super::payload::{FieldKind, Payload};
use crate::errors::PayloadContext;

/// Body of `POST /threads`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewThread {
    pub title: String,
    pub body: String,
}

impl Payload for NewThread {
    const CONTEXT: PayloadContext = PayloadContext::NewThread;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[("title", FieldKind::String), ("body", FieldKind::String)];
}

/// What the repository hands back after inserting a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl Payload for AddedThread {
    const CONTEXT: PayloadContext = PayloadContext::AddedThread;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::String),
        ("title", FieldKind::String),
        ("owner", FieldKind::String),
    ];
}

/// A thread joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl Payload for ThreadDetail {
    const CONTEXT: PayloadContext = PayloadContext::DetailThread;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("id", FieldKind::String),
        ("title", FieldKind::String),
        ("body", FieldKind::String),
        ("date", FieldKind::String),
        ("username", FieldKind::String),
    ];
}

/// `data.thread` of `GET /threads/{threadId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetailView {
    #[serde(flatten)]
    pub thread: ThreadDetail,
    pub comments: Vec<ThreadComment>,
}
