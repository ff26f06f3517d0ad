//! # Ports
//!
//! Every adapter must implement these traits to be wired into the services.
//! There are no default bodies: a missing method is a compile error.

mod authentication_repository;
mod comment_repository;
mod security;
mod thread_repository;
mod user_repository;

pub use authentication_repository::AuthenticationRepository;
pub use comment_repository::CommentRepository;
pub use security::{AuthenticationTokenManager, PasswordHash};
pub use thread_repository::ThreadRepository;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "testing"))]
pub use authentication_repository::MockAuthenticationRepository;
#[cfg(any(test, feature = "testing"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "testing"))]
pub use security::{MockAuthenticationTokenManager, MockPasswordHash};
#[cfg(any(test, feature = "testing"))]
pub use thread_repository::MockThreadRepository;
#[cfg(any(test, feature = "testing"))]
pub use user_repository::MockUserRepository;
