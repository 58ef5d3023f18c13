use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use content_sync_core::events::types::ChangeEvent;
use content_sync_core::sync::SyncOutcome;
use content_sync_core::Error as CoreError;
use serde_json::{json, Value};
use subtle::ConstantTimeEq;
use tower_http::limit::RequestBodyLimitLayer;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub const SECRET_HEADER: &str = "x-webhook-secret";

/// Database webhook receiver.
pub fn routes(body_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/api/products", post(receive_change))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
}

/// Mirror one product row change into the document store.
///
/// The body is decoded by hand so malformed payloads get the same
/// `{ "error": ... }` shape as every other rejection.
async fn receive_change(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    verify_secret(state.config().webhook_secret.as_deref(), &headers)?;

    let event = ChangeEvent::from_slice(&body).map_err(CoreError::from)?;

    let outcome = state.sync().handle(&event).await.map_err(|err| match err {
        CoreError::Upstream(e) => ApiError::WebhookFailed(e.to_string()),
        other => ApiError::from(other),
    })?;

    match outcome {
        SyncOutcome::Deleted(_) => Ok(Json(json!({ "message": "Product deleted" }))),
        SyncOutcome::Saved(product) => Ok(Json(json!({
            "message": "Product saved",
            "product": product,
        }))),
    }
}

fn verify_secret(expected: Option<&str>, headers: &HeaderMap) -> ApiResult<()> {
    let Some(expected) = expected else {
        return Ok(());
    };
    let provided = headers
        .get(SECRET_HEADER)
        .map(|v| v.as_bytes())
        .unwrap_or_default();
    if provided.ct_eq(expected.as_bytes()).into() {
        Ok(())
    } else {
        tracing::warn!("rejected webhook with missing or wrong secret");
        Err(ApiError::Unauthorized)
    }
}
