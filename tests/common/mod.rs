//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use reqscope::{HttpServer, ServerConfig, Shutdown};

/// Start an inspector server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle keeping it alive.
pub async fn start_server() -> (SocketAddr, Shutdown) {
    let config = ServerConfig::default();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for the server to start accepting
    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}

/// Send raw bytes over a fresh connection, half-close the write side, and
/// read the full response.
#[allow(dead_code)]
pub async fn send_raw(addr: SocketAddr, request: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut response = Vec::new();
    let _ = stream.read_to_end(&mut response).await;
    String::from_utf8_lossy(&response).into_owned()
}
