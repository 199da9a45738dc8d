//! npm registry client for Canopy
//!
//! This crate provides HTTP client functionality for fetching package
//! metadata (the set of published versions) and per-version manifests from an
//! npm-compatible registry, classifying every failure into the shared
//! `CanopyError` taxonomy.

pub mod api;
pub mod client;

// Re-export main types
pub use api::{PackageMetadata, VersionManifest};
pub use client::{RegistryClient, RegistryConfig};

use canopy_core::CanopyError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, CanopyError>;
