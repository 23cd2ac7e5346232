//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the inspection handler mounted on every path
//! - Wire up middleware (tracing, request timeout)
//! - Expose connection endpoints to the handler via connect info
//! - Serve until the shutdown signal fires

use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{LimitsConfig, ServerConfig};
use crate::http::inspect::inspect_handler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Address the listening socket is bound to.
    pub server_addr: SocketAddr,
    /// Request handling limits.
    pub limits: LimitsConfig,
}

/// HTTP server for the request inspector.
pub struct HttpServer {
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Every path hits the same inspection handler; methods other than GET
    /// and POST fall through to Axum's 405 handling.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(inspect_handler).post(inspect_handler))
            .route("/{*path}", get(inspect_handler).post(inspect_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.limits.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server running");

        let state = AppState {
            server_addr: addr,
            limits: self.config.limits.clone(),
        };
        let app = Self::build_router(&self.config, state)
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
