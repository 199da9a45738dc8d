//! Error types and result aliases for Canopy operations.
//!
//! Every failure is classified at its origin (registry client or version
//! selector) and passed through intervening layers unchanged; nothing
//! downgrades a specific kind to a generic one until the HTTP boundary maps
//! kinds onto status codes.

use thiserror::Error;

/// Unified error type for all Canopy operations
#[derive(Error, Debug)]
pub enum CanopyError {
    // Selection errors
    #[error("invalid version constraint '{constraint}': {reason}")]
    InvalidConstraint { constraint: String, reason: String },

    #[error("no compatible version of '{package}' for constraint '{constraint}' (available: {available})")]
    NoCompatibleVersion {
        package: String,
        constraint: String,
        /// Lexically sorted, capped at 10 entries
        available: String,
    },

    // Registry errors
    #[error("request timed out fetching '{package}' from registry")]
    Timeout { package: String },

    #[error("bad gateway while fetching '{package}': {reason}")]
    BadGateway { package: String, reason: String },

    #[error("unable to find package '{package}' in registry")]
    NotFound { package: String },

    #[error("registry returned unexpected status {status} for '{package}'")]
    BadStatus { package: String, status: u16 },

    #[error("malformed registry payload for '{package}': {reason}")]
    MalformedPayload { package: String, reason: String },

    // Resolution errors
    #[error("dependency cycle detected: {chain}")]
    CyclicDependency { chain: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for Canopy operations
pub type CanopyResult<T> = Result<T, CanopyError>;

impl CanopyError {
    /// Create an internal error from any displayable cause
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error means the requested package or version cannot
    /// exist as asked for (as opposed to a transient upstream condition)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CanopyError::InvalidConstraint { .. }
                | CanopyError::NoCompatibleVersion { .. }
                | CanopyError::NotFound { .. }
        )
    }
}
