//! Server lifecycle: startup checks, schema creation, serving, shutdown.

use std::sync::Arc;

use axum::Router;
use equa_core::Equation;
use equa_storage::EquationStore;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::routes::router;
use crate::state::AppState;
use crate::Result;

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Creates a server over an already opened store.
    pub fn new(config: ServerConfig, store: Arc<dyn EquationStore>) -> Self {
        let state = AppState::new(store, config.database.clone());
        Self { config, state }
    }

    /// The configuration this server was built with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The router with all routes and layers attached.
    pub fn router(&self) -> Router {
        router(self.state.clone())
    }

    /// Runs the startup checks and ensures the schema exists.
    ///
    /// A failed connectivity check or sample solve is logged and does not
    /// stop startup. A failed schema creation does.
    pub async fn prepare(&self) -> Result<()> {
        match self.state.store.ping().await {
            Ok(_) => tracing::info!(
                backend = self.state.store.backend(),
                url = %self.config.database.redacted_url(),
                "database reachable"
            ),
            Err(err) => tracing::warn!(error = %err, "database check failed"),
        }

        let sample = Equation::new(1.0, -5.0, 6.0);
        tracing::info!(equation = %sample, "solver self-check");

        self.state.store.init_schema().await?;
        tracing::debug!("schema ready");
        Ok(())
    }

    /// Binds, prepares and serves until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<()> {
        self.prepare().await?;

        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        tracing::info!(addr = %listener.local_addr()?, "listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("bind_addr", &self.config.bind_addr())
            .field("state", &self.state)
            .finish()
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %err, "no shutdown signal available");
                    std::future::pending::<()>().await;
                }
            }
        }
    }
    #[cfg(not(unix))]
    {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "no shutdown signal available");
            std::future::pending::<()>().await;
        }
    }
    tracing::info!("shutdown requested");
}
