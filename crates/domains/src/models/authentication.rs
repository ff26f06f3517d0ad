use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::{FieldKind, Payload};
use crate::errors::{DomainError, PayloadContext};

/// Body of `POST /authentications`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl Payload for UserLogin {
    const CONTEXT: PayloadContext = PayloadContext::UserLogin;
    const FIELDS: &'static [(&'static str, FieldKind)] =
        &[("username", FieldKind::String), ("password", FieldKind::String)];
}

impl fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Token pair issued on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

/// Identity carried inside both token kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: String,
    pub username: String,
}

/// Body of `PUT` and `DELETE /authentications`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTokenPayload {
    pub refresh_token: String,
}

impl RefreshTokenPayload {
    /// Unlike the other payloads these carry dedicated error codes.
    pub fn parse(context: PayloadContext, payload: &Value) -> Result<Self, DomainError> {
        match payload.get("refreshToken") {
            None | Some(Value::Null) => Err(DomainError::MissingRefreshToken(context)),
            Some(Value::String(token)) if token.is_empty() => Err(DomainError::MissingRefreshToken(context)),
            Some(Value::String(token)) => Ok(Self {
                refresh_token: token.clone(),
            }),
            Some(_) => Err(DomainError::InvalidRefreshTokenType(context)),
        }
    }
}
