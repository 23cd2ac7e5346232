//! reqscope — diagnostic HTTP request inspector.
//!
//! Accepts any GET/POST request, captures its full structure (method, path,
//! query, headers, body, connection endpoints), logs a formatted snapshot,
//! and echoes the capture back as pretty-printed JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request ──▶ listener (tokio TCP) ──▶ http server (axum)
//!                                                       │
//!                                                       ▼
//!                                            capture (RequestRecord)
//!                                                       │
//!                                     ┌─────────────────┴────────────────┐
//!                                     ▼                                  ▼
//!                          operational log (tracing)           JSON echo response
//! ```

use clap::Parser;
use tokio::net::TcpListener;

use reqscope::config::loader::load_config;
use reqscope::observability::logging;
use reqscope::{HttpServer, ServerConfig, Shutdown};

/// Diagnostic HTTP server: captures requests and echoes them back as JSON.
#[derive(Debug, Parser)]
#[command(name = "reqscope", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// TCP port to listen on (overrides the config file).
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind (overrides the config file).
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = args.port {
        config.listener.port = port;
    }
    if let Some(bind) = args.bind {
        config.listener.host = bind;
    }

    logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        max_body_size = config.limits.max_body_size,
        request_timeout_secs = config.limits.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Interrupt received, shutting down"),
            Err(err) => tracing::error!(error = %err, "Failed to listen for interrupt"),
        }
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
