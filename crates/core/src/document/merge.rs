use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use super::id::ProductDocumentId;
use super::model::{Document, PRODUCT_TYPE};

/// How an incoming record is combined with the document already stored
/// under the same id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Fetch the stored document and layer the incoming fields on top.
    /// Fields missing from the payload survive.
    #[default]
    Merge,
    /// Build the document from the incoming fields only.
    Replace,
}

impl MergeStrategy {
    /// Whether the stored document has to be read before writing.
    pub fn needs_existing(&self) -> bool {
        matches!(self, MergeStrategy::Merge)
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::Merge => f.write_str("merge"),
            MergeStrategy::Replace => f.write_str("replace"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown merge strategy '{0}', expected 'merge' or 'replace'")]
pub struct UnknownStrategy(String);

impl FromStr for MergeStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(MergeStrategy::Merge),
            "replace" => Ok(MergeStrategy::Replace),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Build the product document to upsert.
///
/// Layering order: existing content (merge only), then the incoming record,
/// then `_id`/`_type`. Store-managed fields of the existing document are
/// never carried over.
pub fn build_product_document(
    id: &ProductDocumentId,
    existing: Option<&Document>,
    record: &Map<String, Value>,
) -> Document {
    let mut content = existing.map(|doc| doc.content.clone()).unwrap_or_default();

    for (key, value) in record {
        if is_system_field(key) {
            continue;
        }
        content.insert(key.clone(), value.clone());
    }

    Document::new(id.as_str(), PRODUCT_TYPE, content)
}

fn is_system_field(key: &str) -> bool {
    matches!(key, "_id" | "_type" | "_rev" | "_createdAt" | "_updatedAt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::id::RecordId;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn doc_id(n: i64) -> ProductDocumentId {
        ProductDocumentId::from_record(&RecordId::Int(n))
    }

    fn existing() -> Document {
        serde_json::from_value(json!({
            "_id": "product-42",
            "_type": "product",
            "_rev": "rev-1",
            "name": "A",
            "color": "red"
        }))
        .unwrap()
    }

    #[test]
    fn merge_keeps_fields_missing_from_payload() {
        let stored = existing();
        let doc = build_product_document(&doc_id(42), Some(&stored), &record(json!({"name": "B"})));

        assert_eq!(
            doc.to_value(),
            json!({"_id": "product-42", "_type": "product", "name": "B", "color": "red"})
        );
        assert_eq!(doc.rev, None);
    }

    #[test]
    fn replace_drops_fields_missing_from_payload() {
        let doc = build_product_document(&doc_id(42), None, &record(json!({"name": "B"})));

        assert_eq!(
            doc.to_value(),
            json!({"_id": "product-42", "_type": "product", "name": "B"})
        );
    }

    #[test]
    fn payload_cannot_override_identity() {
        let doc = build_product_document(
            &doc_id(42),
            None,
            &record(json!({"_id": "other", "_type": "page", "id": 42})),
        );

        assert_eq!(doc.id, "product-42");
        assert_eq!(doc.doc_type, "product");
        assert_eq!(doc.get("id"), Some(&json!(42)));
    }

    #[test]
    fn parse_strategy() {
        assert_eq!("merge".parse::<MergeStrategy>().unwrap(), MergeStrategy::Merge);
        assert_eq!(" Replace ".parse::<MergeStrategy>().unwrap(), MergeStrategy::Replace);
        assert!("blend".parse::<MergeStrategy>().is_err());
        assert!(MergeStrategy::default().needs_existing());
    }
}
