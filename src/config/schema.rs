//! Configuration schema types

use serde::{Deserialize, Serialize};

/// Scan report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console report
    #[default]
    Text,
    /// Machine-readable JSON report
    Json,
}

/// Main Vakt configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has sensible defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaktConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Scan behavior
    #[serde(default)]
    pub scan: ScanConfig,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VaktConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name, used in log output
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Scan behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Report output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Exit with a non-zero code when identifiers are detected
    #[serde(default = "default_true")]
    pub fail_on_detection: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            fail_on_detection: true,
        }
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: std::path::PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        const ROTATIONS: [&str; 2] = ["daily", "hourly"];
        if !ROTATIONS.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: daily, hourly",
                self.local_rotation
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_app_name() -> String {
    "vakt".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_audit_log_path() -> std::path::PathBuf {
    std::path::PathBuf::from("./audit/scans.log")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
