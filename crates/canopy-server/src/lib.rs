//! Canopy HTTP server
//!
//! Exposes the resolution engine over HTTP: `GET /package/{name}/{constraint}`
//! returns the fully resolved dependency tree as nested JSON, and any failure
//! anywhere in the tree is translated into the wire error envelope
//! `{"status_code", "message"}` with the status code its kind maps to.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::ServerConfig;
pub use error::ErrorBody;
pub use routes::create_router;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use canopy_registry::{RegistryClient, RegistryConfig};
use canopy_resolver::{Resolver, ResolverConfig};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver,
}

impl AppState {
    /// Build the resolver stack from server configuration
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let registry = RegistryClient::with_config(RegistryConfig {
            base_url: config.registry_url.clone(),
            timeout: config.fetch_timeout,
        })
        .context("failed to construct registry client")?;

        let resolver = Resolver::with_config(
            Arc::new(registry),
            ResolverConfig {
                max_concurrent_fetches: config.max_concurrent_fetches,
            },
        );

        Ok(Self { resolver })
    }
}

/// Bind and serve until the process is stopped
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(
        addr = %config.bind_addr,
        registry = %config.registry_url,
        "canopy listening"
    );

    axum::serve(listener, app).await.context("server error")
}
