//! HTTP server lifecycle

use tokio::net::TcpListener;

use super::{AppState, Config, ServerError};
use crate::routes;

/// HTTP server
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    pub fn new(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl+C or SIGTERM, then close the store
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(
            environment = %self.config.environment,
            "Server running on http://{addr}"
        );

        let app = routes::build_app(self.state.clone());
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await;

        self.state.store.close().await;
        served?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
