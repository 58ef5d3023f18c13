/// Document ID utilities.
///
/// Mirrored product documents are keyed by convention:
/// - Product: `product-{recordId}`
/// - Draft: `drafts.{id}`
use std::fmt;

use serde_json::Value;

const DRAFT_PREFIX: &str = "drafts.";
const PRODUCT_PREFIX: &str = "product-";

/// Identifier of a row in the external product table, as sent in the
/// webhook payload. Integer ids are the norm; string ids are passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Read an id out of a JSON value. Returns `None` for null, empty
    /// strings, fractional numbers and any other JSON kind.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordId::Int),
            Value::String(s) if !s.trim().is_empty() => Some(RecordId::Text(s.trim().to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Document id of a mirrored product: `product-{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductDocumentId(String);

impl ProductDocumentId {
    pub fn from_record(id: &RecordId) -> Self {
        Self(format!("{PRODUCT_PREFIX}{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductDocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Published or draft flavour of any document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentIdKind {
    Published(String),
    Draft(String),
}

impl DocumentIdKind {
    pub fn parse(id: &str) -> Self {
        match id.strip_prefix(DRAFT_PREFIX) {
            Some(base) => DocumentIdKind::Draft(base.to_string()),
            None => DocumentIdKind::Published(id.to_string()),
        }
    }

    /// Get the base (published) document ID regardless of prefix.
    pub fn base_id(&self) -> &str {
        match self {
            DocumentIdKind::Published(id) | DocumentIdKind::Draft(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_id_from_integer_record() {
        let id = RecordId::from_value(&json!(42)).unwrap();
        let doc_id = ProductDocumentId::from_record(&id);
        assert_eq!(doc_id.as_str(), "product-42");
    }

    #[test]
    fn product_id_from_string_record() {
        let id = RecordId::from_value(&json!("sku-9")).unwrap();
        assert_eq!(ProductDocumentId::from_record(&id).to_string(), "product-sku-9");
    }

    #[test]
    fn rejects_unusable_record_ids() {
        assert_eq!(RecordId::from_value(&json!(null)), None);
        assert_eq!(RecordId::from_value(&json!("  ")), None);
        assert_eq!(RecordId::from_value(&json!(1.5)), None);
        assert_eq!(RecordId::from_value(&json!({"id": 1})), None);
    }

    #[test]
    fn parse_draft_id() {
        let kind = DocumentIdKind::parse("drafts.product-7");
        assert_eq!(kind, DocumentIdKind::Draft("product-7".into()));
        assert_eq!(kind.base_id(), "product-7");

        let kind = DocumentIdKind::parse("product-7");
        assert_eq!(kind, DocumentIdKind::Published("product-7".into()));
        assert_eq!(kind.base_id(), "product-7");
    }
}
