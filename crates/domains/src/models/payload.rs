//! Two-stage payload validation shared by every entity.
//!
//! Stage one rejects absent keys, stage two rejects wrongly typed values.
//! Type errors are only reported once every required key is present.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{DomainError, PayloadContext};

/// JSON type a required field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// A value object built from an untyped JSON payload.
pub trait Payload: DeserializeOwned {
    const CONTEXT: PayloadContext;
    const FIELDS: &'static [(&'static str, FieldKind)];

    /// Validates `payload` against [`Self::FIELDS`] and builds the entity.
    fn from_payload(payload: &Value) -> Result<Self, DomainError> {
        validate_fields(Self::CONTEXT, Self::FIELDS, payload)?;
        // The shape is already checked; a failure here means a string that
        // does not parse into a richer type (a date, for instance).
        serde_json::from_value(payload.clone()).map_err(|_| DomainError::InvalidDataType(Self::CONTEXT))
    }
}

/// Runs both stages without building anything.
pub fn validate_fields(
    context: PayloadContext,
    fields: &[(&str, FieldKind)],
    payload: &Value,
) -> Result<(), DomainError> {
    let present = |key: &str| match payload.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };

    if !fields.iter().all(|(key, _)| present(key)) {
        return Err(DomainError::MissingProperty(context));
    }

    let well_typed = fields
        .iter()
        .all(|(key, kind)| payload.get(*key).is_some_and(|value| kind.matches(value)));
    if !well_typed {
        return Err(DomainError::InvalidDataType(context));
    }

    Ok(())
}
