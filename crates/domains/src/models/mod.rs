//! # Domain Models
//!
//! Immutable value objects validated at construction. Ids are prefixed
//! strings (`thread-…`, `comment-…`, `user-…`) minted by the storage layer.

pub mod authentication;
pub mod comment;
pub mod payload;
pub mod thread;
pub mod user;

pub use authentication::{NewAuth, RefreshTokenPayload, TokenPayload, UserLogin};
pub use comment::{AddedComment, CommentDetail, DeleteComment, NewComment, ThreadComment, DELETED_COMMENT_PLACEHOLDER};
pub use payload::{validate_fields, FieldKind, Payload};
pub use thread::{AddedThread, NewThread, ThreadDetail, ThreadDetailView};
pub use user::{RegisterUser, RegisteredUser, USERNAME_MAX_CHARS};
