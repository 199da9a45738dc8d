//! # canopy
//!
//! Dependency tree resolution server for the npm registry.
//!
//! This is the main entry point for the Canopy server. It handles argument
//! parsing, sets up logging, builds the async runtime and starts the HTTP
//! server.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use canopy_server::ServerConfig;

/// Dependency tree resolution server for the npm registry
#[derive(Parser)]
#[command(name = "canopy", version, about = "npm dependency tree resolution server")]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "CANOPY_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Base URL of the upstream npm-compatible registry
    #[arg(long, env = "CANOPY_REGISTRY", default_value = "https://registry.npmjs.org")]
    pub registry: String,

    /// Registry request timeout in seconds
    #[arg(long, env = "CANOPY_FETCH_TIMEOUT", default_value_t = 30)]
    pub fetch_timeout: u64,

    /// Cap on in-flight registry requests (omit for unbounded fan-out)
    #[arg(long, env = "CANOPY_MAX_FETCHES")]
    pub max_fetches: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    info!("Starting Canopy v{}", env!("CARGO_PKG_VERSION"));

    run_cli(cli)
}

fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = ServerConfig {
        bind_addr: cli.bind,
        registry_url: cli.registry,
        fetch_timeout: Duration::from_secs(cli.fetch_timeout),
        max_concurrent_fetches: cli.max_fetches,
    };

    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(canopy_server::serve(config))
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "canopy={level},canopy_server={level},canopy_resolver={level},canopy_registry={level}"
        ))
        .with_target(false)
        .init();
}
