#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use content_sync_api::{build_app, AppConfig, AppState};
use content_sync_core::document::model::Document;
use content_sync_core::schema::SchemaRegistry;
pub use content_sync_core::store::testing::{RecordingStore, StoreCall};
use serde_json::Value;
use tower::ServiceExt;

/// Decode a document literal.
pub fn doc(value: Value) -> Document {
    serde_json::from_value(value).unwrap()
}

pub fn config(vars: &[(&str, &str)]) -> AppConfig {
    let mut all: HashMap<String, String> = HashMap::new();
    all.insert("SANITY_PROJECT_ID".into(), "test".into());
    for (k, v) in vars {
        all.insert(k.to_string(), v.to_string());
    }
    AppConfig::from_lookup(|name| all.get(name).cloned()).unwrap()
}

pub fn app(store: Arc<RecordingStore>, config: AppConfig) -> Router {
    build_app(AppState::new(config, store, SchemaRegistry::builtin()))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, value)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}
