//! Server binary for the schedviz harness.
//!
//! Wires together the relay configuration and the observer server.
//! Loads configuration, initializes logging, and serves the dashboard
//! plus `WebSocket` endpoint until the process is terminated. The
//! scheduler simulation itself is an external pre-compiled executable
//! launched on demand from the `WebSocket` session.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `schedviz-config.yaml`
//! 3. Build the shared broadcast state
//! 4. Run the HTTP + `WebSocket` server in the foreground

mod config;

use std::path::Path;
use std::sync::Arc;

use schedviz_observer::{start_server, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigError};

/// Application entry point for the schedviz server.
///
/// # Errors
///
/// Returns an error if configuration loading or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("schedviz-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        executable = %config.relay.executable.display(),
        line_delay_ms = config.relay.line_delay_ms,
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // 3. Build shared state: the broadcast channel every run emits into.
    let state = Arc::new(AppState::new(config.relay));

    // 4. Serve until terminated.
    start_server(&config.server, state).await?;

    Ok(())
}

/// Load the harness configuration from `schedviz-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<AppConfig, ConfigError> {
    let config_path = Path::new("schedviz-config.yaml");
    if config_path.exists() {
        let config = AppConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(AppConfig::default())
    }
}
