//! LoRaPanel ingestion server binary.
//!
//! Wires the `MongoDB` store into the HTTP API and serves it until a
//! shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (optional `lorapanel.{toml,yaml}` + environment)
//! 2. Initialize structured logging (tracing)
//! 3. Connect to `MongoDB` and verify with a ping
//! 4. Serve the HTTP API
//! 5. Close the database client on shutdown
//!
//! Any failure before step 4 terminates the process before a listener is
//! bound.

mod config;
mod error;

use std::sync::Arc;

use anyhow::Context;
use lorapanel_api::{start_server, AppState};
use lorapanel_db::MongoStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};
use crate::error::StartupError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database is
/// unreachable, or the HTTP server fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration.
    let config = AppConfig::load().context("failed to load configuration")?;

    // 2. Initialize structured logging.
    init_tracing(config.log_format);
    info!("lorapanel-server starting");
    info!(
        database = config.mongodb_database,
        host = config.host,
        port = config.port,
        unique_sensor_names = config.unique_sensor_names,
        "Configuration loaded"
    );

    // 3. Connect to MongoDB.
    info!("Connecting to MongoDB");
    let store = MongoStore::connect(&config.mongo_config())
        .await
        .map_err(StartupError::from)
        .context("failed to connect to MongoDB")?;
    info!("Connected to MongoDB successfully");

    // 4. Serve the HTTP API.
    let state = Arc::new(AppState::new(Arc::new(store.clone())));
    let served = start_server(&config.server_config(), state).await;

    // 5. Close the database client.
    store.close().await;

    served
        .map_err(StartupError::from)
        .context("API server exited with error")?;

    info!("lorapanel-server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
