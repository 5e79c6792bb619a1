//! Validate config command implementation
//!
//! Implements the `validate-config` command for validating the Vakt
//! configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application:       {}", config.application.name);
        println!("  Log Level:         {}", config.application.log_level);
        println!("  Output Format:     {:?}", config.scan.output_format);
        println!("  Fail on Detection: {}", config.scan.fail_on_detection);
        println!("  Audit Enabled:     {}", config.audit.enabled);
        println!("  Audit Log Path:    {}", config.audit.log_path.display());
        println!("  File Logging:      {}", config.logging.local_enabled);
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        let _ = format!("{args:?}");
    }

    #[test]
    fn test_validate_missing_file_returns_config_error_code() {
        let args = ValidateArgs {};
        let code = args.execute("/nonexistent/vakt.toml").unwrap();
        assert_eq!(code, 2);
    }
}
