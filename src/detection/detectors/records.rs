//! Record locator detectors: patient/journal IDs and ward-bed locators

use crate::detection::detectors::IdentifierDetector;
use crate::detection::models::IdentifierReason;
use anyhow::{Context, Result};
use regex::Regex;

/// Detector for labeled patient/journal identifiers.
///
/// A label token optionally followed by `:` or `#`, then an alphanumeric
/// code of at least three characters. The code must contain a digit, so a
/// label followed by a plain word ("PID: treated") stays clean.
pub struct PatientIdDetector {
    pattern: Regex,
}

impl PatientIdDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"(?i)\b(?:patient[-\s]?id|patientid|journal[-\s]?(?:nr|nummer|id)|mrn|pid|pnr|personnr|record\s?(?:no|number)|medical\s+record\s+number)\s*[:#]?\s*([A-Za-z0-9][A-Za-z0-9-]{2,})\b",
        )
        .context("Invalid patient id pattern")?;
        Ok(Self { pattern })
    }
}

impl IdentifierDetector for PatientIdDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::PatientIdOrJournalNumber
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        for caps in self.pattern.captures_iter(text) {
            let code = match caps.get(1) {
                Some(c) => c,
                None => continue,
            };
            if !code.as_str().chars().any(|c| c.is_ascii_digit()) {
                continue;
            }
            if let Some(whole) = caps.get(0) {
                return Some(whole.as_str());
            }
        }
        None
    }
}

/// Detector for ward-bed locators.
///
/// Compound pattern: ward/unit token + number + bed/room token + number,
/// optionally followed by a `kl`/`at` marked 24-hour clock time. Flagged as
/// a locator even though clock times alone are not blocked.
pub struct WardBedDetector {
    pattern: Regex,
}

impl WardBedDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"(?i)\b(?:avd(?:elning(?:en)?)?|vårdavd(?:elning(?:en)?)?|ward|unit|enhet)\.?\s*\d+\p{L}?\s*,?\s*(?:säng|sal|plats|bädd|bed|room|rum)\.?\s*\d+\p{L}?(?:\s*,?\s*(?:kl\.?|klockan|at)?\s*(?:[01]?\d|2[0-3])[:.][0-5]\d)?",
        )
        .context("Invalid ward-bed pattern")?;
        Ok(Self { pattern })
    }
}

impl IdentifierDetector for WardBedDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::WardBedTimestamp
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("MRN: 12345", Some("MRN: 12345"); "mrn with colon")]
    #[test_case("journalnr 2023-4411", Some("journalnr 2023-4411"); "swedish journal number")]
    #[test_case("patient-id #A992B", Some("patient-id #A992B"); "hash separator with mixed code")]
    #[test_case("PID: treated with antibiotics", None; "label followed by a word")]
    #[test_case("mrn 12", None; "code too short")]
    #[test_case("inga id-nummer här", None; "clean text")]
    fn test_patient_id_cases(text: &str, expected: Option<&str>) {
        assert_eq!(PatientIdDetector::new().unwrap().find_first(text), expected);
    }

    #[test]
    fn test_patient_id_skips_wordy_code_then_matches_later() {
        let text = "PID: unclear, journalnr 44812 enligt remiss";
        assert_eq!(
            PatientIdDetector::new().unwrap().find_first(text),
            Some("journalnr 44812")
        );
    }

    #[test_case("ligger på avd 3 sal 2", Some("avd 3 sal 2"); "ward and room")]
    #[test_case("avd 3, plats 2, kl 14:30", Some("avd 3, plats 2, kl 14:30"); "full locator with clock")]
    #[test_case("ward 5 bed 12 at 08:15", Some("ward 5 bed 12 at 08:15"); "english locator")]
    #[test_case("avdelningen 7 säng 1", Some("avdelningen 7 säng 1"); "long ward form")]
    #[test_case("flyttad till sal 2", None; "bed token without ward")]
    #[test_case("avd 3 är full", None; "ward without bed")]
    fn test_ward_bed_cases(text: &str, expected: Option<&str>) {
        assert_eq!(WardBedDetector::new().unwrap().find_first(text), expected);
    }
}
