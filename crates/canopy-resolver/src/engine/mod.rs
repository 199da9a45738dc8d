//! Recursive concurrent resolution engine
//!
//! Each tree node is resolved by one Tokio task: fetch the package's
//! metadata, select the highest version satisfying the caller's constraint,
//! fetch that version's manifest, then spawn one child task per declared
//! dependency and join on all of them. Children hand their results back to
//! the joining parent, which performs every insertion itself, so the per-node
//! dependency map never needs a lock.
//!
//! Failure semantics: the first child failure observed in completion order
//! wins and becomes the node's result; later failures and later successes are
//! discarded. In-flight siblings are never cancelled, and a node does not
//! return until every directly launched child has completed. Which of several
//! concurrent failures gets reported is a race by design, not declaration
//! order.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tracing::{debug, instrument};

use canopy_core::{CanopyError, ResolvedPackage};
use canopy_registry::{PackageMetadata, RegistryClient, VersionManifest};

use crate::select::select_highest;
use crate::ResolverResult;

/// Resolution engine configuration
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Cap on in-flight registry requests across the whole tree
    ///
    /// With `None` every dependency edge fans out immediately. The cap bounds
    /// registry I/O only, never the number of live resolution tasks; a permit
    /// is held across a single fetch, not across a node's child join, so a
    /// deep tree cannot deadlock against the limiter.
    pub max_concurrent_fetches: Option<usize>,
}

/// Orchestrates recursive concurrent dependency resolution
///
/// Cheap to clone; clones share the registry client and the fetch limiter.
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Registry client, shared by every resolution task
    registry: Arc<RegistryClient>,
    /// Optional registry-fetch limiter
    limiter: Option<Arc<Semaphore>>,
}

impl Resolver {
    /// Create a resolver with unbounded fan-out
    pub fn new(registry: Arc<RegistryClient>) -> Self {
        Self::with_config(registry, ResolverConfig::default())
    }

    /// Create a resolver with custom configuration
    pub fn with_config(registry: Arc<RegistryClient>, config: ResolverConfig) -> Self {
        Self {
            registry,
            limiter: config
                .max_concurrent_fetches
                .map(|n| Arc::new(Semaphore::new(n))),
        }
    }

    /// Resolve a package and constraint into a full dependency tree
    ///
    /// On success every transitive dependency is pinned to the highest
    /// version satisfying the constraint its parent declared for it. On
    /// failure the error is one that actually occurred somewhere in the tree,
    /// classified at its origin; no partial tree is returned.
    #[instrument(skip(self))]
    pub async fn resolve(&self, name: &str, constraint: &str) -> ResolverResult<ResolvedPackage> {
        self.clone()
            .resolve_node(name.to_string(), constraint.to_string(), Vec::new())
            .await
    }

    /// Resolve one tree node and, recursively, its children
    ///
    /// `ancestry` is the chain of package names from the root to this node's
    /// parent; a name recurring in its own chain is a dependency cycle.
    /// Boxed because the future recurses through `tokio::spawn`.
    fn resolve_node(
        self,
        name: String,
        constraint: String,
        ancestry: Vec<String>,
    ) -> Pin<Box<dyn Future<Output = ResolverResult<ResolvedPackage>> + Send + 'static>> {
        Box::pin(async move {
            if ancestry.contains(&name) {
                let mut chain = ancestry;
                chain.push(name);
                return Err(CanopyError::CyclicDependency {
                    chain: chain.join(" -> "),
                });
            }

            let mut node = ResolvedPackage::new(&name);

            let metadata = self.fetch_metadata(&name).await?;
            let selected = select_highest(&name, &constraint, &metadata.version_strings())?;
            node.version = selected.to_string();

            let manifest = self.fetch_manifest(&name, &node.version).await?;
            debug!(
                package = %name,
                version = %node.version,
                dependencies = manifest.dependencies.len(),
                "resolved concrete version"
            );

            let mut ancestry = ancestry;
            ancestry.push(name);

            // One task per dependency edge, no deduplication: the same name
            // in sibling subtrees resolves independently and may pin a
            // different version.
            let mut children = JoinSet::new();
            for (dep_name, dep_constraint) in manifest.dependencies {
                let resolver = self.clone();
                let ancestry = ancestry.clone();
                children.spawn(async move {
                    let result = resolver
                        .resolve_node(dep_name.clone(), dep_constraint, ancestry)
                        .await;
                    (dep_name, result)
                });
            }

            // Join on every child: first failure wins, everything arriving
            // after it is discarded, nothing in flight is cancelled.
            let mut first_error: Option<CanopyError> = None;
            while let Some(joined) = children.join_next().await {
                match joined {
                    Ok((dep_name, Ok(dep))) => {
                        if first_error.is_none() {
                            node.dependencies.insert(dep_name, dep);
                        }
                    }
                    Ok((dep_name, Err(err))) => {
                        if first_error.is_none() {
                            debug!(package = %dep_name, error = %err, "dependency failed");
                            first_error = Some(err);
                        }
                    }
                    Err(join_err) => {
                        if first_error.is_none() {
                            first_error = Some(CanopyError::internal(format!(
                                "dependency resolution task failed: {join_err}"
                            )));
                        }
                    }
                }
            }

            match first_error {
                Some(err) => Err(err),
                None => Ok(node),
            }
        })
    }

    async fn fetch_metadata(&self, name: &str) -> ResolverResult<PackageMetadata> {
        let _permit = self.acquire_fetch_permit().await?;
        self.registry.fetch_metadata(name).await
    }

    async fn fetch_manifest(&self, name: &str, version: &str) -> ResolverResult<VersionManifest> {
        let _permit = self.acquire_fetch_permit().await?;
        self.registry.fetch_manifest(name, version).await
    }

    /// Take a limiter permit for the duration of one registry call
    async fn acquire_fetch_permit(&self) -> ResolverResult<Option<OwnedSemaphorePermit>> {
        match &self.limiter {
            Some(limiter) => limiter
                .clone()
                .acquire_owned()
                .await
                .map(Some)
                .map_err(|_| CanopyError::internal("registry fetch limiter closed")),
            None => Ok(None),
        }
    }
}
