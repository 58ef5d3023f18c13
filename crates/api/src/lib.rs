//! HTTP surface of the product sync service.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use config::AppConfig;
pub use state::AppState;

/// Router with every route group and the standard middleware stack.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state)
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer())
}
