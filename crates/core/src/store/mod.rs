//! Document store access.
//!
//! Handlers only see the [`DocumentStore`] trait; the process wires in a
//! [`SanityClient`] at startup and tests substitute a [`testing::RecordingStore`].

pub mod sanity;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::document::model::Document;

pub use sanity::{SanityClient, SanityConfig};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("document store responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid document store URL: {0}")]
    InvalidUrl(String),
}

/// Query parameters, keyed without the `$` sigil.
pub type QueryParams = Map<String, Value>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run a query and return its result. The query text is opaque here.
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, StoreError>;

    /// Fetch a single document by id. `Ok(None)` when it does not exist.
    async fn get_document(&self, id: &str) -> Result<Option<Document>, StoreError>;

    /// Create the document, or replace it wholesale if the id exists.
    async fn create_or_replace(&self, document: Document) -> Result<Document, StoreError>;

    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
