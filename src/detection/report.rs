//! Scan reporting
//!
//! Formatted reports for scan results, consumed by the CLI: a console
//! rendering for operators and a JSON rendering for tooling.

use crate::detection::models::{IdentifierDetectionResult, IdentifierMatch, IdentifierReason};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gate verdict for a scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanVerdict {
    /// No identifiers found; the text may be forwarded
    Passed,
    /// Identifiers found; the text must not be forwarded
    Blocked,
}

impl std::fmt::Display for ScanVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passed => f.write_str("PASSED"),
            Self::Blocked => f.write_str("BLOCKED"),
        }
    }
}

/// Report for a single scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// When the scan ran
    pub timestamp: DateTime<Utc>,

    /// Gate verdict
    pub verdict: ScanVerdict,

    /// Input length in characters
    pub input_chars: usize,

    /// Distinct categories detected, first-seen order
    pub reasons: Vec<IdentifierReason>,

    /// Deduplicated matches, first-seen order
    pub matches: Vec<IdentifierMatch>,
}

impl ScanReport {
    /// Build a report from a detection result.
    pub fn from_result(result: &IdentifierDetectionResult, input_chars: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            verdict: if result.has_identifiers {
                ScanVerdict::Blocked
            } else {
                ScanVerdict::Passed
            },
            input_chars,
            reasons: result.reasons.clone(),
            matches: result.matches.clone(),
        }
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                       VAKT SCAN REPORT                        \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Verdict:              {}\n", self.verdict));
        output.push_str(&format!("  Input Length (chars): {}\n", self.input_chars));
        output.push_str(&format!("  Categories Detected:  {}\n", self.reasons.len()));
        output.push_str(&format!("  Total Matches:        {}\n", self.matches.len()));
        output.push('\n');

        if self.matches.is_empty() {
            output.push_str("✅ No identifiers detected — the text may be forwarded.\n");
        } else {
            output.push_str("🔍 DETECTED IDENTIFIERS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for m in &self.matches {
                output.push_str(&format!("  • {}\n", m.diagnostic()));
            }
        }

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }

    /// Count of matches for a specific reason
    pub fn count_for(&self, reason: IdentifierReason) -> usize {
        self.matches.iter().filter(|m| m.reason == reason).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::models::IdentifierMatch;

    fn blocked_result() -> IdentifierDetectionResult {
        IdentifierDetectionResult::from_matches(vec![
            IdentifierMatch::new(IdentifierReason::PreciseAge, "47 years old"),
            IdentifierMatch::new(IdentifierReason::Email, "a@b.se"),
        ])
    }

    #[test]
    fn test_verdict_follows_result() {
        let report = ScanReport::from_result(&blocked_result(), 64);
        assert_eq!(report.verdict, ScanVerdict::Blocked);

        let clean = ScanReport::from_result(&IdentifierDetectionResult::clean(), 10);
        assert_eq!(clean.verdict, ScanVerdict::Passed);
    }

    #[test]
    fn test_format_console_lists_diagnostics() {
        let report = ScanReport::from_result(&blocked_result(), 64);
        let output = report.format_console();
        assert!(output.contains("VAKT SCAN REPORT"));
        assert!(output.contains("Verdict:              BLOCKED"));
        assert!(output.contains("Precise age detected: 47 years old"));
        assert!(output.contains("Email address detected: a@b.se"));
    }

    #[test]
    fn test_format_console_clean() {
        let report = ScanReport::from_result(&IdentifierDetectionResult::clean(), 0);
        let output = report.format_console();
        assert!(output.contains("PASSED"));
        assert!(output.contains("No identifiers detected"));
    }

    #[test]
    fn test_format_json_round_trip() {
        let report = ScanReport::from_result(&blocked_result(), 64);
        let json = report.format_json().unwrap();
        let parsed: ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.verdict, ScanVerdict::Blocked);
        assert_eq!(parsed.matches.len(), 2);
    }

    #[test]
    fn test_count_for() {
        let report = ScanReport::from_result(&blocked_result(), 64);
        assert_eq!(report.count_for(IdentifierReason::Email), 1);
        assert_eq!(report.count_for(IdentifierReason::Date), 0);
    }
}
