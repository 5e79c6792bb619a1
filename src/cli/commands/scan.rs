//! Scan command implementation
//!
//! Runs the identifier gate over text supplied as an argument, a file, or
//! stdin, prints the report, appends the hashed audit entry, and exits
//! non-zero when the text must be blocked.

use crate::config::{load_config_or_default, OutputFormat};
use crate::detection::{AuditLogger, DetectionEngine, ScanReport};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Text to scan. Reads from --file or stdin when omitted
    pub text: Option<String>,

    /// Read the text to scan from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Report format (text, json), overriding the configuration
    #[arg(long)]
    pub format: Option<String>,

    /// Write the JSON report to a file in addition to printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScanArgs {
    /// Execute the scan command
    ///
    /// Exit codes: 0 when the text is clean (or `fail_on_detection` is off),
    /// 1 when identifiers were detected, 2 on configuration errors.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Configuration error: {e}");
                return Ok(2);
            }
        };

        let input = self.read_input()?;
        tracing::info!(input_chars = input.chars().count(), "Starting scan");

        let engine = DetectionEngine::new()?;
        let result = engine.detect(&input);
        let report = ScanReport::from_result(&result, input.chars().count());

        let format = match self.format.as_deref() {
            Some("json") => OutputFormat::Json,
            Some("text") => OutputFormat::Text,
            Some(other) => {
                eprintln!("❌ Invalid --format: {other} (expected text or json)");
                return Ok(2);
            }
            None => config.scan.output_format,
        };

        match format {
            OutputFormat::Text => print!("{}", report.format_console()),
            OutputFormat::Json => println!("{}", report.format_json()?),
        }

        if let Some(ref path) = self.output {
            report.write_to_file(path)?;
            tracing::info!(path = %path.display(), "Report written");
        }

        let audit = AuditLogger::new(
            config.audit.log_path.clone(),
            config.audit.json_format,
            config.audit.enabled,
        )?;
        audit.log_scan(&result, input.chars().count())?;

        tracing::info!(
            blocked = result.has_identifiers,
            categories = result.reasons.len(),
            "Scan completed"
        );

        if result.has_identifiers && config.scan.fail_on_detection {
            Ok(1)
        } else {
            Ok(0)
        }
    }

    /// Resolve the text to scan from argument, file, or stdin.
    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        if let Some(ref path) = self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
