//! Audit logger for scan operations
//!
//! Records what the gate decided without recording the identifiers
//! themselves: matched substrings are written as SHA-256 hashes, never
//! plaintext.

use crate::detection::models::IdentifierDetectionResult;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    verdict: String,
    input_chars: usize,
    detections_count: usize,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed match text)
#[derive(Debug, Serialize)]
struct AuditDetection {
    category: String,
    /// SHA-256 hash of the matched substring (never log plaintext)
    value_hash: String,
}

/// Audit logger for scan operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a scan outcome
    pub fn log_scan(&self, result: &IdentifierDetectionResult, input_chars: usize) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            verdict: if result.has_identifiers {
                "blocked".to_string()
            } else {
                "passed".to_string()
            },
            input_chars,
            detections_count: result.matches.len(),
            detections: result
                .matches
                .iter()
                .map(|m| AuditDetection {
                    category: m.reason.label().to_string(),
                    value_hash: hash_match_value(&m.text),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Verdict: {} | Detections: {} | Input chars: {}",
                entry.timestamp, entry.verdict, entry.detections_count, entry.input_chars
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash a matched value using SHA-256
fn hash_match_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
