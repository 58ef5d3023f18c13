use std::sync::Arc;

use content_sync_core::resolver::ProductResolver;
use content_sync_core::schema::SchemaRegistry;
use content_sync_core::store::DocumentStore;
use content_sync_core::sync::ProductSync;

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: AppConfig,
    store: Arc<dyn DocumentStore>,
    schema: Arc<SchemaRegistry>,
    sync: ProductSync,
    resolver: ProductResolver,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn DocumentStore>, schema: SchemaRegistry) -> Self {
        let schema = Arc::new(schema);
        let sync = ProductSync::new(store.clone(), config.sync_strategy, schema.clone());
        let resolver = ProductResolver::new(store.clone());
        Self {
            inner: Arc::new(InnerState {
                config,
                store,
                schema,
                sync,
                resolver,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.inner.store.as_ref()
    }

    pub fn schema(&self) -> &SchemaRegistry {
        &self.inner.schema
    }

    pub fn sync(&self) -> &ProductSync {
        &self.inner.sync
    }

    pub fn resolver(&self) -> &ProductResolver {
        &self.inner.resolver
    }
}
