//! Contact detail detectors: email, phone, address

use crate::detection::detectors::personal_number::PERSONAL_NUMBER_SHAPE;
use crate::detection::detectors::IdentifierDetector;
use crate::detection::models::IdentifierReason;
use anyhow::{Context, Result};
use regex::Regex;

/// Detector for email addresses.
pub struct EmailDetector {
    pattern: Regex,
}

impl EmailDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b")
            .context("Invalid email pattern")?;
        Ok(Self { pattern })
    }
}

impl IdentifierDetector for EmailDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::Email
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}

/// Detector for phone numbers.
///
/// A candidate is a run of at least seven digits allowing separators and an
/// optional `+` country prefix. A candidate whose full text has the strict
/// personal-number shape is never reported here, so a single token cannot be
/// flagged under both categories.
pub struct PhoneDetector {
    candidate: Regex,
    personal_shape: Regex,
}

impl PhoneDetector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            candidate: Regex::new(r"(?:\+|\b)\d[\d ()\-–]{4,}\d\b")
                .context("Invalid phone candidate pattern")?,
            personal_shape: Regex::new(PERSONAL_NUMBER_SHAPE)
                .context("Invalid personal number shape pattern")?,
        })
    }
}

impl IdentifierDetector for PhoneDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::PhoneNumber
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        for m in self.candidate.find_iter(text) {
            let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
            if digits < 7 {
                continue;
            }
            if self.personal_shape.is_match(m.as_str()) {
                continue;
            }
            return Some(m.as_str());
        }
        None
    }
}

/// Detector for street addresses and P.O. boxes.
pub struct AddressDetector {
    patterns: Vec<Regex>,
}

impl AddressDetector {
    pub fn new() -> Result<Self> {
        let sources = [
            // Swedish street-suffix word plus house number: "Storgatan 12 B"
            r"(?i)\b\p{L}+(?:gatan|vägen|gränden|gränd|torget|allén|stigen|backen|platsen|esplanaden|leden)\s+\d{1,4}(?:\s?\p{L})?\b",
            // English number-first form: "12 Baker Street"
            r"(?i)\b\d{1,5}\s+\p{L}+(?:\s+\p{L}+)?\s+(?:street|road|avenue|lane|drive|boulevard|court|place)\b",
            // P.O. box
            r"(?i)\b(?:p\.?\s?o\.?\s?box|postbox|box)\s+\d+\b",
        ];
        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            patterns
                .push(Regex::new(source).with_context(|| format!("Invalid address pattern: {source}"))?);
        }
        Ok(Self { patterns })
    }
}

impl IdentifierDetector for AddressDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::Address
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        for pattern in &self.patterns {
            if let Some(m) = pattern.find(text) {
                return Some(m.as_str());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("kontakta anna.larsson@regionh.se", Some("anna.larsson@regionh.se"); "plain email")]
    #[test_case("mail TO: First.Last+x@Example.COM idag", Some("First.Last+x@Example.COM"); "mixed case email")]
    #[test_case("ingen snabel-a här", None; "no email")]
    fn test_email_cases(text: &str, expected: Option<&str>) {
        assert_eq!(EmailDetector::new().unwrap().find_first(text), expected);
    }

    #[test_case("ring 070-123 45 67", Some("070-123 45 67"); "swedish mobile")]
    #[test_case("call +46 70 123 45 67", Some("+46 70 123 45 67"); "country prefix")]
    #[test_case("tel (555) 123-4567", Some("555) 123-4567"); "us grouping")]
    #[test_case("rum 12, anknytning 4523", None; "too few digits")]
    #[test_case("BT 120/80", None; "vitals with slash")]
    fn test_phone_cases(text: &str, expected: Option<&str>) {
        assert_eq!(PhoneDetector::new().unwrap().find_first(text), expected);
    }

    #[test]
    fn test_phone_excludes_personal_number_shape() {
        let detector = PhoneDetector::new().unwrap();
        // Exactly the personal-number shape: never reported as a phone.
        assert_eq!(detector.find_first("pnr 850709-9805"), None);
        assert_eq!(detector.find_first("19850709-9805"), None);
        // A real phone later in the same text is still found.
        assert_eq!(
            detector.find_first("850709-9805, tel 070-123 45 67"),
            Some("070-123 45 67")
        );
    }

    #[test_case("bor på Storgatan 12", Some("Storgatan 12"); "swedish street")]
    #[test_case("Ringvägen 52 B, 2 tr", Some("Ringvägen 52 B"); "street with letter entrance")]
    #[test_case("sent to 12 Baker Street yesterday", Some("12 Baker Street"); "english street")]
    #[test_case("skicka till Box 1042", Some("Box 1042"); "po box")]
    #[test_case("promenerar på vägen hem", None; "street word without number")]
    fn test_address_cases(text: &str, expected: Option<&str>) {
        assert_eq!(AddressDetector::new().unwrap().find_first(text), expected);
    }
}
