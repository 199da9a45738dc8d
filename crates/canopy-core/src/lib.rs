//! # canopy-core
//!
//! Core types and utilities shared across all Canopy crates.
//!
//! This crate provides:
//! - The `ResolvedPackage` dependency-tree node
//! - The `CanopyError` enum for unified error handling
//!
//! Every other crate in the workspace builds on these: the registry client
//! and the resolution engine classify their failures into `CanopyError`, and
//! the HTTP surface maps those kinds onto wire status codes.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CanopyError, CanopyResult};
pub use types::ResolvedPackage;
