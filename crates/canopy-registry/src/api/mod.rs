//! npm registry API response types
//!
//! Both payloads are ephemeral: metadata is consumed to pick a concrete
//! version and discarded, a manifest is consumed once per node to discover
//! the children to recurse into.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Package metadata response from the registry
///
/// Maps every published version string to that version's manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackageMetadata {
    /// All published versions
    pub versions: HashMap<String, VersionManifest>,
}

/// Manifest for a single published version
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionManifest {
    /// Package name
    pub name: String,
    /// Version string
    pub version: String,
    /// Declared dependencies (name -> constraint expression)
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
}

impl PackageMetadata {
    /// Collect the published version strings, in no particular order
    pub fn version_strings(&self) -> Vec<String> {
        self.versions.keys().cloned().collect()
    }
}
