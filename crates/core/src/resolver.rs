//! Read side of the product detail page.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::seo::{page_metadata, PageMetadata};
use crate::store::DocumentStore;

pub const PRODUCT_PAGE_QUERY: &str = r#"*[_type == "product" && id == $id][0]{
  _id,
  _type,
  id,
  name,
  description,
  images,
  created_at,
  updated_at
}"#;

pub const PRODUCT_PATHS_QUERY: &str = r#"*[_type == "product" && defined(id)].id"#;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPage {
    pub product: Value,
    pub metadata: PageMetadata,
}

/// Route parameters of one pre-rendered detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPath {
    pub id: String,
}

#[derive(Clone)]
pub struct ProductResolver {
    store: Arc<dyn DocumentStore>,
}

impl ProductResolver {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Resolve page data for the decimal id in a route segment.
    pub async fn page(&self, id_text: &str) -> Result<ProductPage> {
        let id: i64 = id_text
            .parse()
            .map_err(|_| Error::NotFound(format!("product {id_text}")))?;

        let mut params = Map::new();
        params.insert("id".to_string(), Value::from(id));
        let product = self.store.fetch(PRODUCT_PAGE_QUERY, &params).await?;

        if product.is_null() {
            debug!(id, "no product document for id");
            return Err(Error::NotFound(format!("product {id}")));
        }

        let metadata = page_metadata(Some(&product));
        Ok(ProductPage { product, metadata })
    }

    /// Ids of every mirrored product, for pre-rendering.
    pub async fn paths(&self) -> Result<Vec<ProductPath>> {
        let ids = self.store.fetch(PRODUCT_PATHS_QUERY, &Map::new()).await?;
        let ids = match ids {
            Value::Array(ids) => ids,
            Value::Null => Vec::new(),
            other => vec![other],
        };

        Ok(ids
            .iter()
            .filter_map(path_segment)
            .map(|id| ProductPath { id })
            .collect())
    }
}

/// Decimal text of an id; `None` for falsy values.
fn path_segment(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i != 0).then(|| i.to_string())
            } else if let Some(f) = n.as_f64() {
                (f != 0.0 && !f.is_nan()).then(|| f.to_string())
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::{RecordingStore, StoreCall};
    use serde_json::json;

    #[tokio::test]
    async fn page_for_existing_product() {
        let store = Arc::new(RecordingStore::default().with_query_result(
            PRODUCT_PAGE_QUERY,
            json!({"_id": "product-7", "id": 7, "name": "Lamp"}),
        ));
        let resolver = ProductResolver::new(store.clone());

        let page = resolver.page("7").await.unwrap();

        assert_eq!(page.product["name"], json!("Lamp"));
        assert_eq!(page.metadata.title.as_deref(), Some("Lamp"));
        let mut params = Map::new();
        params.insert("id".into(), json!(7));
        assert_eq!(store.calls(), vec![StoreCall::Fetch(PRODUCT_PAGE_QUERY.into(), params)]);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let store = Arc::new(RecordingStore::default());
        let resolver = ProductResolver::new(store);

        let err = resolver.page("404").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn non_numeric_id_skips_store() {
        let store = Arc::new(RecordingStore::default());
        let resolver = ProductResolver::new(store.clone());

        let err = resolver.page("lamp").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn paths_skip_falsy_ids() {
        let store = Arc::new(
            RecordingStore::default().with_query_result(PRODUCT_PATHS_QUERY, json!([1, null, 3])),
        );
        let resolver = ProductResolver::new(store);

        let paths = resolver.paths().await.unwrap();
        let ids: Vec<_> = paths.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn path_segment_rules() {
        assert_eq!(path_segment(&json!(12)), Some("12".into()));
        assert_eq!(path_segment(&json!(0)), None);
        assert_eq!(path_segment(&json!("")), None);
        assert_eq!(path_segment(&json!(false)), None);
        assert_eq!(path_segment(&json!("9")), Some("9".into()));
    }
}
