use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Map, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const PRODUCT_COUNT_QUERY: &str = r#"count(*[_type == "product"])"#;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check — verifies the document store answers queries.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let products = state
        .store()
        .fetch(PRODUCT_COUNT_QUERY, &Map::new())
        .await
        .map_err(|e| ApiError::Internal(format!("document store health check failed: {e}")))?;

    Ok(Json(json!({
        "status": "ok",
        "documentStore": "connected",
        "products": products,
        "syncStrategy": state.sync().strategy().to_string(),
    })))
}

/// Lightweight ping — no document store check.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
