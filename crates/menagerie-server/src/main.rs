//! Server binary for the Menagerie query service.
//!
//! This is the main entry point. All wiring is explicit construction:
//! a single startup sequence builds every component and hands it to the
//! server; there is no registry of beans, no reflection, no runtime
//! discovery.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `menagerie-config.yaml` (defaults if absent)
//! 3. Build the discriminator registry and validate it against the
//!    closed variant set — a gap aborts startup here, before any
//!    request can observe it
//! 4. Build the query service
//! 5. Assemble shared state and serve until terminated

use std::path::Path;
use std::sync::Arc;

use menagerie_api::server::{start_server, ServerConfig};
use menagerie_api::state::AppState;
use menagerie_core::config::{ConfigError, ServiceConfig};
use menagerie_core::{AnimalQueryService, DiscriminatorRegistry};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Where the optional configuration file is expected.
const CONFIG_PATH: &str = "menagerie-config.yaml";

/// Application entry point.
///
/// Initializes all components and runs the server. Returns an error on
/// any startup failure.
///
/// # Errors
///
/// Returns an error if configuration loading, registry validation, or
/// the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("menagerie-server starting");

    // 2. Load configuration.
    let ServiceConfig { server, assets } = load_config()?;
    info!(
        host = server.host,
        port = server.port,
        dist_dir = assets.dist_dir,
        entry = assets.entry,
        "Configuration loaded"
    );

    // 3. Build the discriminator registry and check it covers the closed
    //    variant set.
    let registry = DiscriminatorRegistry::standard();
    registry.validate()?;
    info!("Discriminator registry validated");

    // 4. Build the query service.
    let query = AnimalQueryService::new();

    // 5. Assemble shared state and serve.
    let state = Arc::new(AppState::new(query, registry, assets));
    let server_config = ServerConfig {
        host: server.host,
        port: server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}

/// Load the configuration file, falling back to compiled-in defaults
/// when it does not exist.
///
/// Environment overrides apply on both paths.
fn load_config() -> Result<ServiceConfig, ConfigError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        ServiceConfig::from_file(path)
    } else {
        info!(path = CONFIG_PATH, "No config file found, using defaults");
        let mut config = ServiceConfig::default();
        config.server.apply_env_overrides();
        Ok(config)
    }
}
