/// Webhook payload validation.
use serde_json::{Map, Value};
use thiserror::Error;

use super::id::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid webhook data")]
    MissingType,
    #[error("Invalid webhook data: {0}")]
    Malformed(String),
    #[error("Unhandled event type: {0}")]
    UnhandledType(String),
    #[error("Invalid webhook data: {0} is required")]
    MissingRecord(&'static str),
    #[error("Invalid webhook data: {0}.id is missing or not a valid id")]
    InvalidRecordId(&'static str),
}

/// Validate a row image (`record` or `old_record`) and extract its id.
///
/// `field` names the payload key for error reporting.
pub fn validate_row<'a>(
    row: Option<&'a Value>,
    field: &'static str,
) -> Result<(RecordId, &'a Map<String, Value>), ValidationError> {
    let map = match row {
        Some(Value::Object(map)) => map,
        _ => return Err(ValidationError::MissingRecord(field)),
    };
    let id = map
        .get("id")
        .and_then(RecordId::from_value)
        .ok_or(ValidationError::InvalidRecordId(field))?;
    Ok((id, map))
}
