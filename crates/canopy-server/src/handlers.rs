//! HTTP request handlers for the Canopy server

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::error::error_response;
use crate::AppState;

/// GET /package/:name/:constraint
///
/// Resolve a package against a version constraint and return the full
/// transitive dependency tree, every node pinned to a concrete version. A
/// failure anywhere in the tree fails the whole request with the first error
/// recorded; the partial tree is never surfaced.
pub async fn resolve_package(
    State(state): State<AppState>,
    Path((name, constraint)): Path<(String, String)>,
) -> Response {
    match state.resolver.resolve(&name, &constraint).await {
        Ok(tree) => (StatusCode::OK, Json(tree)).into_response(),
        Err(err) => {
            error!(package = %name, constraint = %constraint, error = %err, "resolution failed");
            error_response(&err)
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
