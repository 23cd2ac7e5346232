//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, connect info)
//!     → inspect.rs (capture request, log snapshot, echo JSON)
//!     → Send to client
//! ```

pub mod inspect;
pub mod server;

pub use server::HttpServer;
