//! Core data types for dependency resolution.

mod package;

pub use package::ResolvedPackage;
