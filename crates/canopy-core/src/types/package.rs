//! Resolved dependency-tree node.
//!
//! Defines the structure returned to clients: each node pins a package name
//! to a concrete version and owns its resolved children.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A package pinned to a concrete version, with its resolved dependencies
///
/// A node starts with `name` set, an empty `version` and no dependencies.
/// The resolution step that owns it fills in `version` and inserts one child
/// per dependency name declared in the selected version's manifest. Once the
/// owning resolution returns successfully the node is complete; a node from a
/// failed resolution must not be used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: String,
    pub dependencies: HashMap<String, ResolvedPackage>,
}

impl ResolvedPackage {
    /// Create an unresolved node for a package name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: String::new(),
            dependencies: HashMap::new(),
        }
    }

    /// Check whether a concrete version has been assigned yet
    pub fn is_resolved(&self) -> bool {
        !self.version.is_empty()
    }

    /// Count every node in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .values()
            .map(ResolvedPackage::node_count)
            .sum::<usize>()
    }
}
