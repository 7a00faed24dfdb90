//! TCP listener and graceful shutdown for the TaskFlow router.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::AppConfig;

// =============================================================================
// ServerConfig
// =============================================================================

/// Bind address, taken from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` as passed to [`TcpListener::bind`].
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

// =============================================================================
// Server
// =============================================================================

pub struct Server {
    config: ServerConfig,
}

impl Server {
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Serves `router` until Ctrl+C or SIGTERM, then lets in-flight requests
    /// finish.
    ///
    /// # Errors
    ///
    /// Binding the listener or accepting connections failed.
    pub async fn run(self, router: Router) -> anyhow::Result<()> {
        let listener = TcpListener::bind(self.config.bind_address()).await?;
        tracing::info!(address = %listener.local_addr()?, "TaskFlow API listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("TaskFlow API stopped");
        Ok(())
    }
}

/// Resolves on the first of Ctrl+C or SIGTERM. A handler that cannot be
/// installed is logged and never fires.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let source = tokio::select! {
        () = interrupt => "Ctrl+C",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal = source, "shutting down");
}
