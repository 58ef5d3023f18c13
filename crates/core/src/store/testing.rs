//! In-memory [`DocumentStore`] for tests, shared with downstream crates
//! through the `test-utils` feature.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::{DocumentStore, QueryParams, StoreError};
use crate::document::model::Document;

/// Revision stamped on every document the store writes.
pub const STORED_REV: &str = "rev-1";

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Fetch(String, QueryParams),
    GetDocument(String),
    CreateOrReplace(Document),
    Delete(String),
}

/// Store double that records every call and can be told to fail.
#[derive(Default)]
pub struct RecordingStore {
    documents: Mutex<HashMap<String, Document>>,
    query_results: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<StoreCall>>,
    fail: bool,
}

impl RecordingStore {
    /// Every call is recorded, then answered with a 503.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_document(self, doc: Document) -> Self {
        self.documents.lock().unwrap().insert(doc.id.clone(), doc);
        self
    }

    /// Result returned by `fetch` for this exact query text. Other queries
    /// yield `null`.
    pub fn with_query_result(self, query: &str, result: Value) -> Self {
        self.query_results
            .lock()
            .unwrap()
            .insert(query.to_string(), result);
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(StoreError::Status {
                status: 503,
                body: "service unavailable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, StoreError> {
        self.record(StoreCall::Fetch(query.to_string(), params.clone()))?;
        Ok(self
            .query_results
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or(Value::Null))
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>, StoreError> {
        self.record(StoreCall::GetDocument(id.to_string()))?;
        Ok(self.documents.lock().unwrap().get(id).cloned())
    }

    async fn create_or_replace(&self, document: Document) -> Result<Document, StoreError> {
        self.record(StoreCall::CreateOrReplace(document.clone()))?;
        let mut stored = document;
        stored.rev = Some(STORED_REV.into());
        self.documents
            .lock()
            .unwrap()
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.record(StoreCall::Delete(id.to_string()))?;
        self.documents.lock().unwrap().remove(id);
        Ok(())
    }
}
