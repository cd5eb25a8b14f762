//! Web server for Files Manager.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::ServerConfig;
use crate::db::SessionRepository;
use crate::file::FileService;
use crate::{FilesError, Result};

use super::handlers::{AppState, SharedDatabase};
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, files: FileService) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| {
                FilesError::Config(format!(
                    "invalid server address {}:{}: {}",
                    config.host, config.port, e
                ))
            })?;

        Ok(Self {
            addr,
            app_state: Arc::new(AppState::new(files)),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Build the complete router.
    pub fn router(&self) -> Router {
        create_router(self.app_state.clone())
            .merge(create_health_router())
            .layer(CompressionLayer::new())
    }

    /// Start the session cleanup background task.
    ///
    /// Runs every hour and removes expired sessions.
    fn start_session_cleanup_task(db: SharedDatabase) {
        tokio::spawn(async move {
            const CLEANUP_INTERVAL_SECS: u64 = 3600;

            let mut interval = tokio::time::interval(Duration::from_secs(CLEANUP_INTERVAL_SECS));

            // Skip the first immediate tick
            interval.tick().await;

            loop {
                interval.tick().await;

                match SessionRepository::new(db.pool()).cleanup_expired().await {
                    Ok(0) => tracing::debug!("No expired sessions to clean up"),
                    Ok(count) => {
                        tracing::info!(deleted_count = count, "Cleaned up expired sessions");
                    }
                    Err(e) => tracing::warn!(error = %e, "Failed to cleanup sessions"),
                }
            }
        });
    }

    /// Bind the listener and start background tasks.
    async fn bind(&self) -> std::io::Result<(TcpListener, SocketAddr)> {
        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        Self::start_session_cleanup_task(self.app_state.db.clone());
        tracing::info!("Session cleanup task started (runs every hour)");

        tracing::info!("Web server listening on http://{}", local_addr);
        Ok((listener, local_addr))
    }

    /// Run the web server.
    pub async fn run(self) -> std::io::Result<()> {
        let router = self.router();
        let (listener, _) = self.bind().await?;

        axum::serve(listener, router).await
    }

    /// Run the server and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::io::Result<SocketAddr> {
        let router = self.router();
        let (listener, local_addr) = self.bind().await?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
