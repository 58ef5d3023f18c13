use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use content_sync_core::resolver::{ProductPage, ProductPath};

use crate::error::ApiResult;
use crate::state::AppState;

/// Product detail page data and the path list used to pre-render it.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(product_paths))
        .route("/products/{id}", get(product_page))
}

async fn product_paths(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductPath>>> {
    Ok(Json(state.resolver().paths().await?))
}

async fn product_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductPage>> {
    Ok(Json(state.resolver().page(&id).await?))
}
