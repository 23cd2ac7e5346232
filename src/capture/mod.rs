//! Request capture subsystem.
//!
//! # Data Flow
//! ```text
//! parsed HTTP request (axum)
//!     → target.rs (origin-form URL decomposition)
//!     → query.rs (form-encoded query → ordered multimap)
//!     → record.rs (assemble immutable RequestRecord)
//!     → serialized once, feeding both the operational log and the response
//! ```
//!
//! # Design Decisions
//! - Capture is a pure function of one request; no state crosses requests
//! - Malformed input becomes a typed CaptureError, never a panic
//! - Repeated header names collapse last-one-wins

pub mod error;
pub mod query;
pub mod record;
pub mod target;

pub use error::CaptureError;
pub use record::{BasicInfo, RequestRecord};
pub use target::ParsedTarget;
