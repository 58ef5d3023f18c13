//! Mirrors product row changes into the document store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::document::id::ProductDocumentId;
use crate::document::merge::{build_product_document, MergeStrategy};
use crate::document::model::{Document, PRODUCT_TYPE};
use crate::document::validate::validate_row;
use crate::error::Result;
use crate::events::types::{ChangeEvent, ChangeKind};
use crate::schema::SchemaRegistry;
use crate::store::DocumentStore;

/// What a handled change event did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    Saved(Document),
    Deleted(ProductDocumentId),
}

#[derive(Clone)]
pub struct ProductSync {
    store: Arc<dyn DocumentStore>,
    strategy: MergeStrategy,
    schema: Arc<SchemaRegistry>,
}

impl ProductSync {
    pub fn new(store: Arc<dyn DocumentStore>, strategy: MergeStrategy, schema: Arc<SchemaRegistry>) -> Self {
        Self {
            store,
            strategy,
            schema,
        }
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Apply one change event. Validation happens before any store call.
    pub async fn handle(&self, event: &ChangeEvent) -> Result<SyncOutcome> {
        let kind = event.kind()?;

        match kind {
            ChangeKind::Delete => {
                let (record_id, _) = validate_row(event.old_record.as_ref(), "old_record")?;
                let doc_id = ProductDocumentId::from_record(&record_id);
                info!(event_type = %kind, document_id = %doc_id, "deleting product document");

                self.store.delete(doc_id.as_str()).await?;
                Ok(SyncOutcome::Deleted(doc_id))
            }
            ChangeKind::Insert | ChangeKind::Update => {
                let (record_id, record) = validate_row(event.record.as_ref(), "record")?;
                let doc_id = ProductDocumentId::from_record(&record_id);
                info!(
                    event_type = %kind,
                    document_id = %doc_id,
                    strategy = %self.strategy,
                    "saving product document"
                );

                let undeclared = self.schema.undeclared_fields(PRODUCT_TYPE, record);
                if !undeclared.is_empty() {
                    debug!(document_id = %doc_id, fields = ?undeclared, "record carries undeclared fields");
                }

                let existing = if self.strategy.needs_existing() {
                    self.store.get_document(doc_id.as_str()).await?
                } else {
                    None
                };

                let document = build_product_document(&doc_id, existing.as_ref(), record);
                let saved = self.store.create_or_replace(document).await?;
                Ok(SyncOutcome::Saved(saved))
            }
        }
    }
}
