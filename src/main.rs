//! Edge relay server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Crawler                ┌───────────────────────────────────────┐
//!     ──────────────────────▶│ http::server (axum, trace, timeout)   │
//!                            │        │                              │
//!                            │        ▼                              │
//!                            │ relay::route  ── /read/ ──▶ upstream ─┼──▶ target URL
//!                            │        │      ── 204/404 (local)      │
//!                            │        │      ── other  ──▶ upstream ─┼──▶ origin server
//!                            │        ▼                              │
//!     ◀──────────────────────│ relay::error (500 boundary)           │
//!                            └───────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use edge_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use edge_relay::http::HttpServer;
use edge_relay::lifecycle::{signals, Shutdown};
use edge_relay::observability::init_logging;

#[derive(Parser)]
#[command(name = "edge-relay")]
#[command(about = "Relay feed fetches through this host's network", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override origin.address.
    #[arg(short, long)]
    origin: Option<String>,

    /// Override observability.log_level.
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RelayConfig::default(),
        };
        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(origin) = self.origin {
            config.origin.address = Some(origin);
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability.log_level);

    tracing::info!("edge-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        origin = config.origin.address.as_deref().unwrap_or("-"),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config)?;
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    signals::wait_for_shutdown(&shutdown).await;
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
