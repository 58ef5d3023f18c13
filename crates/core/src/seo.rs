//! Page metadata derived from a document.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Build metadata from a document's `title`/`name` and `description`.
/// A rich-text description contributes its span text.
pub fn page_metadata(doc: Option<&Value>) -> PageMetadata {
    let Some(doc) = doc else {
        return PageMetadata::default();
    };

    let title = ["title", "name"]
        .iter()
        .find_map(|key| doc.get(*key).and_then(Value::as_str))
        .map(str::to_string);

    let description = match doc.get("description") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(blocks)) => plain_text(blocks),
        _ => None,
    }
    .filter(|s| !s.trim().is_empty());

    PageMetadata { title, description }
}

/// Concatenate the text spans of block content, one line per block.
fn plain_text(blocks: &[Value]) -> Option<String> {
    let lines: Vec<String> = blocks
        .iter()
        .filter(|block| block.get("_type").and_then(Value::as_str) == Some("block"))
        .filter_map(|block| block.get("children").and_then(Value::as_array))
        .map(|children| {
            children
                .iter()
                .filter_map(|span| span.get("text").and_then(Value::as_str))
                .collect::<String>()
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_and_plain_description() {
        let meta = page_metadata(Some(&json!({"name": "Lamp", "description": "Bright"})));
        assert_eq!(meta.title.as_deref(), Some("Lamp"));
        assert_eq!(meta.description.as_deref(), Some("Bright"));
    }

    #[test]
    fn block_description_flattened() {
        let doc = json!({
            "title": "Lamp page",
            "description": [
                {"_type": "block", "children": [{"text": "A warm "}, {"text": "light."}]},
                {"_type": "image"},
                {"_type": "block", "children": [{"text": "Second line"}]}
            ]
        });
        let meta = page_metadata(Some(&doc));
        assert_eq!(meta.title.as_deref(), Some("Lamp page"));
        assert_eq!(meta.description.as_deref(), Some("A warm light.\nSecond line"));
    }

    #[test]
    fn missing_document_is_empty() {
        assert_eq!(page_metadata(None), PageMetadata::default());
        assert_eq!(page_metadata(Some(&json!({"description": "  "}))), PageMetadata::default());
    }
}
