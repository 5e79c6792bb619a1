//! Logging and observability
//!
//! Structured logging with support for:
//! - Configurable log levels
//! - Console output for interactive use
//! - Optional JSON-formatted local file logging with rotation
//!
//! Matched identifier text is never logged through this layer; detection
//! events carry category tags only, and the audit trail in
//! [`crate::detection::audit`] stores hashes.
//!
//! # Example
//!
//! ```no_run
//! use vakt::logging::init_logging;
//! use vakt::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
