//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown:
//!     ctrl-c → Shutdown::trigger → drain in-flight requests → exit 0
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
