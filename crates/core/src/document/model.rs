use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Document type of mirrored product records.
pub const PRODUCT_TYPE: &str = "product";

/// A document as held by the document store.
///
/// System fields are optional: they are assigned by the store and are absent
/// on documents built locally before an upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_rev", default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(rename = "_createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Arbitrary document fields.
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, doc_type: impl Into<String>, content: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            doc_type: doc_type.into(),
            rev: None,
            created_at: None,
            updated_at: None,
            content,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.content.get(field)
    }

    /// JSON view of the whole document, system fields included.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
