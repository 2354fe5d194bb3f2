//! secure-headers server.
//!
//! Serves the demo application with every response hardened by the security
//! header policy.
//!
//! ```text
//!   Client Request
//!   ──────────────▶ request id → trace → security headers → body limit → timeout → handler
//!   Client Response                            │
//!   ◀───────────────────────────── + CSP, nosniff, DENY, referrer, permissions
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use secure_headers::config::{load_config, validate_config, ConfigError, ServerConfig};
use secure_headers::lifecycle::{wait_for_signal, Shutdown};
use secure_headers::observability::init_logging;
use secure_headers::HttpServer;

#[derive(Parser)]
#[command(name = "secure-headers")]
#[command(about = "HTTP server that adds security headers to every response", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = ?cli.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "secure-headers starting"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
