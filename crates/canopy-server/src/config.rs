//! Server configuration

use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Base URL of the upstream npm-compatible registry
    pub registry_url: String,
    /// Time budget for a single registry request
    pub fetch_timeout: Duration,
    /// Cap on in-flight registry requests (None = unbounded fan-out)
    pub max_concurrent_fetches: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
            registry_url: "https://registry.npmjs.org".to_string(),
            fetch_timeout: Duration::from_secs(30),
            max_concurrent_fetches: None,
        }
    }
}
