//! Semantic version selection
//!
//! Turns a constraint expression plus a set of published version strings into
//! one concrete version: the maximum, by semver precedence, of the published
//! versions that parse and satisfy the constraint.

use semver::{Version, VersionReq};

use canopy_core::CanopyError;

use crate::ResolverResult;

/// How many available versions a `NoCompatibleVersion` error lists at most.
/// A payload-size bound, not a correctness constraint.
const MAX_LISTED_VERSIONS: usize = 10;

/// Select the highest published version satisfying a constraint
///
/// Entries of `available` that do not parse as semantic versions are silently
/// skipped. Fails with `InvalidConstraint` when the constraint expression
/// itself does not parse, and with `NoCompatibleVersion` when nothing in
/// `available` satisfies it. Pure and deterministic for a fixed input set.
pub fn select_highest(
    package: &str,
    constraint: &str,
    available: &[String],
) -> ResolverResult<Version> {
    let req = VersionReq::parse(constraint).map_err(|e| CanopyError::InvalidConstraint {
        constraint: constraint.to_string(),
        reason: e.to_string(),
    })?;

    available
        .iter()
        .filter_map(|raw| Version::parse(raw).ok())
        .filter(|version| req.matches(version))
        .max()
        .ok_or_else(|| CanopyError::NoCompatibleVersion {
            package: package.to_string(),
            constraint: constraint.to_string(),
            available: summarize_versions(available),
        })
}

/// Bounded, lexically sorted summary of the available version strings
fn summarize_versions(available: &[String]) -> String {
    let mut versions: Vec<&str> = available.iter().map(String::as_str).collect();
    versions.sort_unstable();
    versions.truncate(MAX_LISTED_VERSIONS);
    versions.join(", ")
}
