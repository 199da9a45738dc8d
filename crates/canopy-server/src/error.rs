//! Wire-format error mapping
//!
//! The one place where error kinds become HTTP status codes. Every layer
//! below passes kinds through unchanged; anything unmappable here falls back
//! to internal-server-error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use canopy_core::CanopyError;

/// Error object returned to clients on failed resolutions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

/// Map an error kind onto its transport status code
pub fn status_for(err: &CanopyError) -> StatusCode {
    match err {
        CanopyError::InvalidConstraint { .. }
        | CanopyError::NoCompatibleVersion { .. }
        | CanopyError::NotFound { .. } => StatusCode::NOT_FOUND,
        CanopyError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
        CanopyError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        // Pass the upstream status through when it is a representable code
        CanopyError::BadStatus { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        CanopyError::MalformedPayload { .. }
        | CanopyError::CyclicDependency { .. }
        | CanopyError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render an error as the wire envelope
pub fn error_response(err: &CanopyError) -> Response {
    let status = status_for(err);
    let body = ErrorBody {
        status_code: status.as_u16(),
        message: err.to_string(),
    };
    (status, Json(body)).into_response()
}
