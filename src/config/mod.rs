//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → CLI flags override bind host/port
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; the server runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::LimitsConfig;
pub use schema::ListenerConfig;
pub use schema::ServerConfig;
