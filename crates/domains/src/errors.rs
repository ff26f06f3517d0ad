//! # DomainError
//!
//! Centralized error handling for the forum domain.
//! Payload failures render as stable machine codes (e.g.
//! `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`); everything else renders as the
//! message a client may see.

use std::fmt;

use thiserror::Error;

/// Names the payload a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadContext {
    RegisterUser,
    UserLogin,
    NewThread,
    AddedThread,
    DetailThread,
    NewComment,
    AddedComment,
    DetailComment,
    DeleteComment,
    RefreshAuthentication,
    DeleteAuthentication,
}

impl PayloadContext {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RegisterUser => "REGISTER_USER",
            Self::UserLogin => "USER_LOGIN",
            Self::NewThread => "NEW_THREAD",
            Self::AddedThread => "ADDED_THREAD",
            Self::DetailThread => "DETAIL_THREAD",
            Self::NewComment => "NEW_COMMENT",
            Self::AddedComment => "ADDED_COMMENT",
            Self::DetailComment => "DETAIL_COMMENT",
            Self::DeleteComment => "DELETE_COMMENT",
            Self::RefreshAuthentication => "REFRESH_AUTHENTICATION_USE_CASE",
            Self::DeleteAuthentication => "DELETE_AUTHENTICATION_USE_CASE",
        }
    }
}

impl fmt::Display for PayloadContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The primary error type for every port and use case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required key is absent, null or empty.
    #[error("{0}.NOT_CONTAIN_NEEDED_PROPERTY")]
    MissingProperty(PayloadContext),

    /// Every required key is present but one has the wrong JSON type.
    #[error("{0}.NOT_MEET_DATA_TYPE_SPECIFICATION")]
    InvalidDataType(PayloadContext),

    #[error("REGISTER_USER.USERNAME_LIMIT_CHAR")]
    UsernameLimitChar,

    #[error("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER")]
    UsernameRestrictedCharacter,

    #[error("{0}.NOT_CONTAIN_REFRESH_TOKEN")]
    MissingRefreshToken(PayloadContext),

    #[error("{0}.PAYLOAD_NOT_MEET_DATA_TYPE_SPECIFICATION")]
    InvalidRefreshTokenType(PayloadContext),

    /// Client input rejected by a repository or token check (HTTP 400).
    #[error("{0}")]
    Invariant(String),

    /// Referenced thread, comment or user does not exist (HTTP 404).
    #[error("{0}")]
    NotFound(String),

    /// Credentials were supplied but are wrong (HTTP 401).
    #[error("{0}")]
    Authentication(String),

    /// Authenticated, but not allowed to touch the resource (HTTP 403).
    #[error("{0}")]
    Authorization(String),

    /// Infrastructure failure (e.g., DB down, signing key rejected).
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// A specialized Result type for forum logic.
pub type Result<T> = std::result::Result<T, DomainError>;
