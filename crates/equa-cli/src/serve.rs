//! `equa serve`: configuration resolution and server startup.

use anyhow::{Context, Result};
use equa_api::{Server, ServerConfig};
use std::path::Path;

use crate::ServeArgs;

/// Builds the server configuration.
///
/// Starts from the file at `config_path` (or defaults when absent), then
/// applies each flag or environment override that is set.
pub fn resolve(config_path: Option<&Path>, args: &ServeArgs) -> Result<ServerConfig> {
    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(url) = &args.database_url {
        config.database.url.clone_from(url);
    }
    if let Some(max) = args.max_connections {
        config.database.max_connections = max;
    }

    Ok(config)
}

/// Opens the store and serves until shutdown.
pub async fn run(config_path: Option<&Path>, args: &ServeArgs) -> Result<()> {
    let config = resolve(config_path, args)?;
    tracing::info!(
        bind = %config.bind_addr(),
        database = %config.database.redacted_url(),
        max_connections = config.database.max_connections,
        "starting equa"
    );

    let store = equa_storage::connect(&config.database)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.redacted_url()))?;

    Server::new(config, store).run().await?;
    Ok(())
}
