use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::validate::ValidationError;

/// Row-level change notification sent by a database webhook.
///
/// `type` is optional here so a missing type is reported as invalid webhook
/// data rather than a parse failure. Extra keys (`table`, `schema`, ...) are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeEvent {
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub record: Option<Value>,
    #[serde(default)]
    pub old_record: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Insert => "INSERT",
            ChangeKind::Update => "UPDATE",
            ChangeKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ChangeEvent {
    /// Decode a raw webhook body. Only a JSON object is an event, never a
    /// positional array.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(ValidationError::Malformed("body must be a JSON object".into()));
        }
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed(e.to_string()))
    }

    /// Classify the event. Type names are matched exactly, as sent by the
    /// database (`INSERT`, `UPDATE`, `DELETE`).
    pub fn kind(&self) -> Result<ChangeKind, ValidationError> {
        match self.event_type.as_deref() {
            None | Some("") => Err(ValidationError::MissingType),
            Some("INSERT") => Ok(ChangeKind::Insert),
            Some("UPDATE") => Ok(ChangeKind::Update),
            Some("DELETE") => Ok(ChangeKind::Delete),
            Some(other) => Err(ValidationError::UnhandledType(other.to_string())),
        }
    }
}
