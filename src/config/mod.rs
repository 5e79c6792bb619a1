//! Configuration management for Vakt.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Vakt uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - Environment variable overrides (`VAKT_*` prefix)
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vakt::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("vakt.toml")?;
//! println!("Log level: {}", config.application.log_level);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "vakt"
//! log_level = "info"
//!
//! [scan]
//! output_format = "text"
//! fail_on_detection = true
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/scans.log"
//! json_format = true
//!
//! [logging]
//! local_enabled = false
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AuditConfig, LoggingConfig, OutputFormat, ScanConfig, VaktConfig,
};
