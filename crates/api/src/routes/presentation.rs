use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use content_sync_core::presentation::{resolve_locations, DocumentLocations};
use content_sync_core::schema::SchemaRegistry;
use content_sync_core::Error as CoreError;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Read-only endpoints for the editing studio.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/schema", get(schema))
        .route("/v1/locations/{document_id}", get(locations))
}

async fn schema(State(state): State<AppState>) -> Json<SchemaRegistry> {
    Json(state.schema().clone())
}

async fn locations(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> ApiResult<Json<DocumentLocations>> {
    let doc = state
        .store()
        .get_document(&document_id)
        .await
        .map_err(CoreError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("document {document_id}")))?;

    resolve_locations(&doc)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("locations for {} '{document_id}'", doc.doc_type)))
}
