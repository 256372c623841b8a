use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Messages attached to a single field of a rejected payload.
///
/// The backend emits either a bare string or a list of strings per field;
/// both forms are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldMessages {
    /// A single message.
    One(String),
    /// Several messages for the same field.
    Many(Vec<String>),
}

impl FieldMessages {
    /// All messages for the field, in backend order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        match self {
            Self::One(message) => vec![message.as_str()],
            Self::Many(messages) => messages.iter().map(String::as_str).collect(),
        }
    }
}

/// Field-level validation failures from the backend, keyed by field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ValidationErrors(pub BTreeMap<String, FieldMessages>);

impl ValidationErrors {
    /// Whether no field carries a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every message across all fields, joined with newlines in field order.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0
            .values()
            .flat_map(FieldMessages::messages)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Errors surfaced by the HTTP boundary.
///
/// A failed response resolves into one of two shapes by payload inspection:
/// a structured per-field validation map, or a transport-level message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend rejected the payload with per-field messages.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The request failed in transit or with an unstructured error.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// Build a transport error from any displayable source.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Classify a non-success response from its status code and raw body.
    ///
    /// A body whose values are all strings or string lists — per-field
    /// validation maps and `{"detail": …}` rejections alike — is a
    /// structured payload whose messages are surfaced as-is. Anything else
    /// falls back to a status-line message.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            if !map.is_empty() {
                let mut fields = BTreeMap::new();
                let structured = map.iter().all(|(name, value)| {
                    serde_json::from_value::<FieldMessages>(value.clone())
                        .map(|messages| {
                            fields.insert(name.clone(), messages);
                        })
                        .is_ok()
                });
                if structured {
                    return Self::Validation(ValidationErrors(fields));
                }
            }
        }

        Self::transport(format!("Request failed with status {status}"))
    }
}
