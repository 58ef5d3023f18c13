/// Mutation types for the document store's `data/mutate` endpoint.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::model::Document;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    CreateOrReplace(Document),
    Delete(DeleteTarget),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTarget {
    pub id: String,
}

/// Request body of a mutation transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRequest {
    pub mutations: Vec<Mutation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Result of a mutation transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResult {
    pub id: String,
    #[serde(default)]
    pub operation: Option<String>,
    /// Present when the request asked for `returnDocuments`.
    #[serde(default)]
    pub document: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    #[test]
    fn serialize_transaction() {
        let mut content = Map::new();
        content.insert("name".into(), json!("Lamp"));
        let request = MutationRequest {
            mutations: vec![
                Mutation::CreateOrReplace(Document::new("product-1", "product", content)),
                Mutation::Delete(DeleteTarget {
                    id: "product-2".into(),
                }),
            ],
            transaction_id: Some("tx-1".into()),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "mutations": [
                    {"createOrReplace": {"_id": "product-1", "_type": "product", "name": "Lamp"}},
                    {"delete": {"id": "product-2"}}
                ],
                "transactionId": "tx-1"
            })
        );
    }

    #[test]
    fn deserialize_response_with_documents() {
        let response: MutationResponse = serde_json::from_value(json!({
            "transactionId": "tx-1",
            "results": [
                {"id": "product-1", "operation": "create", "document": {"_id": "product-1"}}
            ]
        }))
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].operation.as_deref(), Some("create"));
        assert!(response.results[0].document.is_some());
    }
}
