//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; per-request snapshots are
//!   ordinary log events, so a failing sink never blocks a response
//! - Log level configurable via RUST_LOG, falling back to the config file

pub mod logging;
