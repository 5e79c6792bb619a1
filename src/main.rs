// Vakt - Clinical Free-Text Identifier Gate
// Copyright (c) 2025 Vakt Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use vakt::cli::{Cli, Commands};
use vakt::config::LoggingConfig;
use vakt::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging with console-only config (no file logging for CLI)
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig {
        local_enabled: false, // Disable file logging for CLI
        local_path: String::new(),
        local_rotation: "daily".to_string(),
    };
    if let Err(e) = init_logging(log_level, &logging_config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Vakt - Clinical Free-Text Identifier Gate"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Scan(args) => args.execute(&cli.config),
        Commands::Categories(args) => args.execute(),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Init(args) => args.execute(),
    }
}
