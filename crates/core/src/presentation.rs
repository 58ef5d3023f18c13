//! Site locations that display a given document, for studio previews.

use serde::Serialize;
use serde_json::Value;

use crate::document::id::DocumentIdKind;
use crate::document::model::{Document, PRODUCT_TYPE};

const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub title: String,
    pub href: String,
}

impl Location {
    fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLocations {
    /// Published id, also for drafts.
    pub document_id: String,
    pub locations: Vec<Location>,
}

/// `None` when the document type has no page on the site.
pub fn resolve_locations(doc: &Document) -> Option<DocumentLocations> {
    let locations = match doc.doc_type.as_str() {
        "blog" => vec![
            Location::new(text_field(doc, "title").unwrap_or(UNTITLED), slug(doc)?),
            Location::new("Blog", "/blog"),
        ],
        "homePage" => vec![Location::new("Home", "/")],
        "page" => vec![Location::new(
            text_field(doc, "title").unwrap_or(UNTITLED),
            slug(doc)?,
        )],
        PRODUCT_TYPE => {
            let id = doc.get("id").and_then(Value::as_i64)?;
            vec![Location::new(
                text_field(doc, "name").unwrap_or(UNTITLED),
                format!("/products/{id}"),
            )]
        }
        _ => return None,
    };

    Some(DocumentLocations {
        document_id: DocumentIdKind::parse(&doc.id).base_id().to_string(),
        locations,
    })
}

fn text_field<'a>(doc: &'a Document, field: &str) -> Option<&'a str> {
    doc.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// `slug.current`, or a bare string slug.
fn slug(doc: &Document) -> Option<String> {
    match doc.get("slug")? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("current").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
