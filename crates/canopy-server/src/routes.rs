//! Axum router configuration for the Canopy server

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dependency tree resolution
        .route("/package/:name/:constraint", get(handlers::resolve_package))
        .layer(cors)
        .with_state(state)
}
