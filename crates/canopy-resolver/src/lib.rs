//! Dependency resolution engine for Canopy
//!
//! This crate is the core of the service: constraint-to-concrete-version
//! selection, recursive concurrent tree construction, and first-error-wins
//! aggregation of partial failures across a tree of sub-resolutions.

pub mod engine;
pub mod select;

// Re-export main types
pub use engine::{Resolver, ResolverConfig};
pub use select::select_highest;

use canopy_core::CanopyError;

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, CanopyError>;
