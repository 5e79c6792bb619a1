//! Init command implementation
//!
//! Implements the `init` command for generating a starter configuration
//! file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "vakt.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Vakt configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: vakt validate-config");
                println!("  3. Scan some text: vakt scan \"...\"");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }

    /// Generate the starter configuration content
    fn generate_config() -> &'static str {
        r#"# Vakt configuration
# Every setting is optional; the values below are the defaults.

[application]
name = "vakt"
# Log level: trace, debug, info, warn, error
log_level = "info"

[scan]
# Report format: text or json
output_format = "text"
# Exit non-zero when identifiers are detected
fail_on_detection = true

[audit]
# Append a hashed audit entry per scan (plaintext is never written)
enabled = true
log_path = "./audit/scans.log"
json_format = true

[logging]
# JSON file logging with rotation, in addition to console output
local_enabled = false
local_path = "./logs"
# Rotation: daily or hourly
local_rotation = "daily"
"#
    }
}
