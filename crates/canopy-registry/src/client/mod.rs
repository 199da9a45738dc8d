//! HTTP client implementation with connection pooling and typed failure
//! classification.
//!
//! Every way a fetch can go wrong maps onto exactly one `CanopyError` kind:
//! transport timeout, network failure, 404, any other non-2xx status, or an
//! unparseable body. Callers up the stack propagate these unchanged.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use canopy_core::CanopyError;

use crate::api::{PackageMetadata, VersionManifest};
use crate::RegistryResult;

/// Transport configuration for registry access
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base registry URL
    pub base_url: String,
    /// Time budget for a single registry request
    pub timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://registry.npmjs.org".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for npm registry operations
///
/// Safe for concurrent use by many resolution tasks simultaneously; the
/// underlying `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client with connection pooling
    client: Client,
    /// Base registry URL
    base_url: String,
}

impl RegistryClient {
    /// Create a new registry client against the public npm registry
    pub fn new() -> RegistryResult<Self> {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry client with custom configuration
    pub fn with_config(config: RegistryConfig) -> RegistryResult<Self> {
        let client = ClientBuilder::new()
            // Connection pooling configuration
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(Duration::from_secs(90))
            // Request timeout
            .timeout(config.timeout)
            // Enable gzip compression
            .gzip(true)
            // User agent
            .user_agent(concat!("canopy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CanopyError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch the set of published versions for a package
    pub async fn fetch_metadata(&self, package_name: &str) -> RegistryResult<PackageMetadata> {
        let url = format!("{}/{}", self.base_url, encode_package_name(package_name));
        self.get_json(&url, package_name).await
    }

    /// Fetch the manifest for one concrete published version
    pub async fn fetch_manifest(
        &self,
        package_name: &str,
        version: &str,
    ) -> RegistryResult<VersionManifest> {
        let spec = format!("{package_name}@{version}");
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            encode_package_name(package_name),
            version
        );
        self.get_json(&url, &spec).await
    }

    /// Issue a GET and classify every failure mode
    ///
    /// `spec` identifies the package (`name` or `name@version`) in errors.
    async fn get_json<T: DeserializeOwned>(&self, url: &str, spec: &str) -> RegistryResult<T> {
        debug!(%url, "fetching from registry");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.npm.install-v1+json")
            .send()
            .await
            .map_err(|e| classify_transport(spec, &e))?;

        match response.status() {
            status if status.is_success() => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| classify_transport(spec, &e))?;
                serde_json::from_slice(&body).map_err(|e| CanopyError::MalformedPayload {
                    package: spec.to_string(),
                    reason: e.to_string(),
                })
            }
            reqwest::StatusCode::NOT_FOUND => Err(CanopyError::NotFound {
                package: spec.to_string(),
            }),
            status => Err(CanopyError::BadStatus {
                package: spec.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

/// Encode a package name for the URL path (handles scoped packages)
fn encode_package_name(name: &str) -> String {
    if name.starts_with('@') {
        // Scoped package: @org/pkg -> @org%2fpkg
        name.replace('/', "%2f")
    } else {
        name.to_string()
    }
}

/// Split transport-level request failures into timeout vs everything else
fn classify_transport(spec: &str, error: &reqwest::Error) -> CanopyError {
    if error.is_timeout() {
        CanopyError::Timeout {
            package: spec.to_string(),
        }
    } else {
        // DNS failure, connection refused, TLS error, broken transfer
        CanopyError::BadGateway {
            package: spec.to_string(),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
