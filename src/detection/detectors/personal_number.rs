//! Swedish personal/coordination number detector

use crate::detection::detectors::IdentifierDetector;
use crate::detection::models::IdentifierReason;
use anyhow::{Context, Result};
use regex::Regex;

/// Anchored shape of a Swedish personal/coordination number:
/// 2- or 4-digit year, month 01-12, day 01-31, `-` or `+` separator,
/// four trailing digits. No checksum — a plausible shape is sufficient,
/// and stricter validation would trade false negatives for nothing.
///
/// Shared with the phone detector, which must never report a token of
/// this exact shape as a phone number.
pub(crate) const PERSONAL_NUMBER_SHAPE: &str =
    r"^(?:\d{2})?\d{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12]\d|3[01])[-+]\d{4}$";

/// Detector for `(YY)YYMMDD[-+]XXXX` shaped tokens.
pub struct PersonalNumberDetector {
    pattern: Regex,
}

impl PersonalNumberDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"\b(?:\d{2})?\d{2}(?:0[1-9]|1[0-2])(?:0[1-9]|[12]\d|3[01])[-+]\d{4}\b",
        )
        .context("Invalid personal number pattern")?;
        Ok(Self { pattern })
    }
}

impl IdentifierDetector for PersonalNumberDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::SwedishPersonalNumber
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}
