//! Hello server - API and static file server for the hello page
//!
//! Answers `GET /api/hello` with a plain-text greeting and serves the built
//! frontend for every other path.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{load_config, Config};
pub use error::{HelloServerError, Result};

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Hello server before its listener is bound
#[derive(Debug)]
pub struct HelloServer {
    config: Config,
}

impl HelloServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the router and bind the configured address
    pub async fn bind(self) -> Result<BoundServer> {
        let router = routes::build_router(&self.config)?;
        let host = self.config.server.host.as_str();
        let port = self.config.server.port;

        let listener = TcpListener::bind((host, port)).await?;
        tracing::debug!("Bound listener on {}:{}", host, port);

        Ok(BoundServer { listener, router })
    }
}

/// Hello server with a bound listener, ready to serve
#[derive(Debug)]
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
}

impl BoundServer {
    /// Address actually bound (useful when configured with port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve requests until `cancel` is triggered
    pub async fn run(self, cancel: CancellationToken) -> Result<()> {
        let addr = self.local_addr()?;
        tracing::info!("Listening on http://{}", addr);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(async move {
                cancel.cancelled().await;
            })
            .await?;

        tracing::debug!("Server stopped");
        Ok(())
    }
}

/// Run the hello server until ctrl-c
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    HelloServer::new(config).bind().await?.run(cancel).await
}
