//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Vakt using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Vakt - Clinical Free-Text Identifier Gate
#[derive(Parser, Debug)]
#[command(name = "vakt")]
#[command(version, about, long_about = None)]
#[command(author = "Vakt Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vakt.toml", env = "VAKT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VAKT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan text for patient identifiers
    Scan(commands::scan::ScanArgs),

    /// List the identifier categories the gate detects
    Categories(commands::categories::CategoriesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["vakt", "scan", "some text"]);
        assert_eq!(cli.config, "vakt.toml");
        assert!(matches!(cli.command, Commands::Scan(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["vakt", "--config", "custom.toml", "categories"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["vakt", "--log-level", "debug", "categories"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["vakt", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["vakt", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
