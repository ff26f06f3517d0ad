use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::{validate_fields, FieldKind, Payload};
use crate::errors::{DomainError, PayloadContext};

pub const USERNAME_MAX_CHARS: usize = 50;

/// Body of `POST /users`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl Payload for RegisterUser {
    const CONTEXT: PayloadContext = PayloadContext::RegisterUser;
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("username", FieldKind::String),
        ("password", FieldKind::String),
        ("fullname", FieldKind::String),
    ];

    fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        validate_fields(Self::CONTEXT, Self::FIELDS, payload)?;
        let user: Self =
            serde_json::from_value(payload.clone()).map_err(|_| DomainError::InvalidDataType(Self::CONTEXT))?;

        if user.username.chars().count() > USERNAME_MAX_CHARS {
            return Err(DomainError::UsernameLimitChar);
        }
        if !user.username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(DomainError::UsernameRestrictedCharacter);
        }
        Ok(user)
    }
}

impl fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUser")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .field("fullname", &self.fullname)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}
