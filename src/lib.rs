//! Diagnostic HTTP request inspector library.
//!
//! Captures the full structure of incoming GET/POST requests and echoes the
//! snapshot back as JSON. See `capture` for the snapshot model and `http`
//! for the serving surface.

pub mod capture;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use capture::RequestRecord;
pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
