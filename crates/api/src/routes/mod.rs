pub mod health;
pub mod presentation;
pub mod products;
pub mod webhook;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config().body_limit_bytes;
    Router::new()
        .merge(health::routes())
        .merge(webhook::routes(body_limit))
        .merge(products::routes())
        .merge(presentation::routes())
        .with_state(state)
}
