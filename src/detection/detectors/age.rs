//! Precise age detector
//!
//! Flags precise age statements while tolerating non-identifying range and
//! decade phrasing. Every candidate match is checked against the span
//! allow-list first; label-style matches that themselves contain a literal
//! range token ("age 20-30") are accepted as non-identifying even without
//! an allow-list hit.

use crate::detection::allowlist::{self, AllowList};
use crate::detection::detectors::IdentifierDetector;
use crate::detection::models::IdentifierReason;
use anyhow::{Context, Result};
use regex::Regex;

struct AgeCandidate {
    pattern: Regex,
    /// Label-style candidates ("age N", "ålder N") may swallow a trailing
    /// range and must then be discarded.
    label_style: bool,
}

/// Detector for precise age statements.
pub struct PreciseAgeDetector {
    allow: AllowList,
    candidates: Vec<AgeCandidate>,
    range_token: Regex,
}

impl PreciseAgeDetector {
    pub fn new() -> Result<Self> {
        let sources = [
            // "47 years old", "47-year-old", "47 yo"
            (r"(?i)\b\d{1,3}[-\s]?(?:years?[-\s]old|y/?o)\b", false),
            // "age 47", "aged 47", "ålder: 47", optionally trailing a range
            (
                r"(?i)\b(?:aged?|ålder)\s*:?\s*\d{1,3}(?:\s*[-–—]\s*\d{1,3})?\b",
                true,
            ),
            // Swedish unit forms: "47 år", "47-årig", "47 år gammal"
            (r"(?i)\b\d{1,3}[-\s]?år(?:ig|s)?(?:\s+gammal)?\b", false),
            // Sex shorthand: "47M", "32F"
            (r"\b\d{1,3}[MF]\b", false),
        ];

        let mut candidates = Vec::with_capacity(sources.len());
        for (source, label_style) in sources {
            let pattern =
                Regex::new(source).with_context(|| format!("Invalid age pattern: {source}"))?;
            candidates.push(AgeCandidate {
                pattern,
                label_style,
            });
        }

        Ok(Self {
            allow: AllowList::new()?,
            candidates,
            range_token: Regex::new(r"\d\s*[-–—]\s*\d").context("Invalid range token pattern")?,
        })
    }
}

impl IdentifierDetector for PreciseAgeDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::PreciseAge
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        let spans = self.allow.allowed_spans(text);

        for candidate in &self.candidates {
            for m in candidate.pattern.find_iter(text) {
                if allowlist::is_suppressed(m.start(), m.end(), &spans) {
                    continue;
                }
                if candidate.label_style && self.range_token.is_match(m.as_str()) {
                    continue;
                }
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

    fn detector() -> PreciseAgeDetector {
        PreciseAgeDetector::new().unwrap()
    }

    #[test_case("patient is 47 years old", Some("47 years old"); "english unit form")]
    #[test_case("a 47-year-old presents with", Some("47-year-old"); "hyphenated unit form")]
    #[test_case("age 47", Some("age 47"); "label form")]
    #[test_case("aged 92 at admission", Some("aged 92"); "aged label")]
    #[test_case("ålder: 63", Some("ålder: 63"); "swedish label with colon")]
    #[test_case("kvinna 47 år", Some("47 år"); "swedish unit form")]
    #[test_case("en 47-årig man", Some("47-årig"); "swedish adjectival form")]
    #[test_case("pat 32F med buksmärta", Some("32F"); "sex shorthand")]
    #[test_case("patient in their 40s", None; "decade expression")]
    #[test_case("i 40-årsåldern", None; "swedish decade expression")]
    #[test_case("age 20-30", None; "label with literal range")]
    #[test_case("ålder 20-30 år", None; "swedish range with unit")]
    #[test_case("normalintervall 15-25 enheter", None; "plain numeric range")]
    #[test_case("vitals stable, no distress", None; "clean text")]
    fn test_precise_age_cases(text: &str, expected: Option<&str>) {
        assert_eq!(detector().find_first(text), expected);
    }

    #[test]
    fn test_standalone_age_near_range_still_flags() {
        // The range suppresses only candidates inside it, not a genuinely
        // precise age elsewhere in the same text.
        let text = "referensintervall 20-30, patienten är 47 år";
        assert_eq!(detector().find_first(text), Some("47 år"));
    }

    #[test]
    fn test_digits_embedded_in_codes_do_not_flag() {
        assert_eq!(detector().find_first("dos 500 mg, kod A47M9"), None);
    }
}
