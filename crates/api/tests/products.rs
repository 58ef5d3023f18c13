mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use content_sync_core::resolver::{PRODUCT_PAGE_QUERY, PRODUCT_PATHS_QUERY};
use serde_json::json;

use common::{app, config, get, send, RecordingStore};

#[tokio::test]
async fn product_page_with_metadata() {
    let store = Arc::new(RecordingStore::default().with_query_result(
        PRODUCT_PAGE_QUERY,
        json!({
            "_id": "product-5",
            "_type": "product",
            "id": 5,
            "name": "Lamp",
            "description": [{"_type": "block", "children": [{"text": "Warm light"}]}]
        }),
    ));

    let (status, body) = send(app(store, config(&[])), get("/products/5")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product"]["name"], "Lamp");
    assert_eq!(body["metadata"], json!({"title": "Lamp", "description": "Warm light"}));
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let store = Arc::new(RecordingStore::default());

    let (status, body) = send(app(store, config(&[])), get("/products/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn non_numeric_product_is_not_found() {
    let store = Arc::new(RecordingStore::default());

    let (status, _) = send(app(store.clone(), config(&[])), get("/products/lamp")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn product_paths_skip_empty_ids() {
    let store = Arc::new(
        RecordingStore::default().with_query_result(PRODUCT_PATHS_QUERY, json!([1, null, 3])),
    );

    let (status, body) = send(app(store, config(&[])), get("/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": "1"}, {"id": "3"}]));
}

#[tokio::test]
async fn store_outage_on_read_is_server_error() {
    let store = Arc::new(RecordingStore::failing());

    let (status, body) = send(app(store, config(&[])), get("/products/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "An internal error occurred"}));
}
