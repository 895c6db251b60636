//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::watch;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        tracing::info!("🚀 QR server listening on {}", addr);

        let app = api::app(state);

        // ctrl_c 后先停止接收新连接，再给在途请求留出 shutdown_timeout_ms
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            let _ = shutdown_tx.send(true);
        });

        let mut graceful_rx = shutdown_rx.clone();
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = graceful_rx.wait_for(|stop| *stop).await;
            })
            .into_future();

        let drain_timeout = Duration::from_millis(self.config.shutdown_timeout_ms);
        let mut deadline_rx = shutdown_rx;
        let deadline = async move {
            let _ = deadline_rx.wait_for(|stop| *stop).await;
            tokio::time::sleep(drain_timeout).await;
        };

        tokio::select! {
            result = serve => {
                result.map_err(|e| ServerError::Internal(anyhow::Error::new(e)))?;
            }
            _ = deadline => {
                tracing::warn!("Graceful shutdown timed out after {:?}", drain_timeout);
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
