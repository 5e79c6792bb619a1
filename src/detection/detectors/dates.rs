//! Date and temporal reference detectors
//!
//! Two categories share the bilingual month vocabulary: `Date` covers
//! numeric calendar forms and bare month-name mentions, `TemporalReference`
//! covers the broader temporal language (clock phrases, relative words,
//! weekdays, ordinals, durations). The temporal detector is intentionally
//! broad: the product blocks essentially all temporal language.

use crate::detection::detectors::IdentifierDetector;
use crate::detection::models::IdentifierReason;
use anyhow::{Context, Result};
use regex::Regex;

/// Bilingual month-name alternation. English "May" must be capitalized so
/// the modal verb does not flag; Swedish "maj" is unambiguous in any case.
/// Months spelled identically in both languages are listed once.
const MONTHS: &str = "(?:(?i:january|february|march|april|june|july|august|september|october|november|december|januari|februari|mars|maj|juni|juli|augusti|oktober)|May)";

fn compile_ordered(sources: &[String]) -> Result<Vec<Regex>> {
    let mut patterns = Vec::with_capacity(sources.len());
    for source in sources {
        let regex =
            Regex::new(source).with_context(|| format!("Invalid temporal pattern: {source}"))?;
        patterns.push(regex);
    }
    Ok(patterns)
}

/// Detector for calendar dates.
///
/// Numeric forms are tried most-specific-first (ISO, then day-month-year,
/// then month-day-year); a bare bilingual month-name mention is the final
/// fallback, so "in May" alone flags.
pub struct DateDetector {
    patterns: Vec<Regex>,
}

impl DateDetector {
    pub fn new() -> Result<Self> {
        let sources = [
            // ISO-like: 2024-01-15, 2024/1/15
            r"\b\d{4}[-/.](?:0?[1-9]|1[0-2])[-/.](?:0?[1-9]|[12]\d|3[01])\b".to_string(),
            // European day-month-year: 15/1/2024, 15.01.24
            r"\b(?:0?[1-9]|[12]\d|3[01])[./-](?:0?[1-9]|1[0-2])[./-]\d{2,4}\b".to_string(),
            // US month-day-year: 1/15/2024
            r"\b(?:0?[1-9]|1[0-2])[./-](?:0?[1-9]|[12]\d|3[01])[./-]\d{2,4}\b".to_string(),
            // Bare month-name mention
            format!(r"\b{MONTHS}\b"),
        ];
        Ok(Self {
            patterns: compile_ordered(&sources)?,
        })
    }
}

impl IdentifierDetector for DateDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::Date
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

/// Detector for temporal references.
///
/// Ordered cascade, first non-empty result wins: marked clock time,
/// time-of-day phrase, relative day/month/year word, weekday with
/// qualifier, bare weekday, ordinal day, numeric duration, ordinal+month
/// compound. A bare clock time without a `kl`/`at` marker is deliberately
/// not flagged here.
pub struct TemporalReferenceDetector {
    patterns: Vec<Regex>,
}

impl TemporalReferenceDetector {
    pub fn new() -> Result<Self> {
        let sources = [
            // Clock time introduced by a marker: "kl 14.30", "at 09:15"
            r"(?i)\b(?:kl\.?|klockan|at)\s*(?:[01]?\d|2[0-3])[:.][0-5]\d\b".to_string(),
            // Time-of-day phrase, optional qualifier: "yesterday evening"
            r"(?i)\b(?:(?:yesterday|today|tomorrow|this|last)\s+)?(?:morning|afternoon|evening|night|tonight|midnight)\b".to_string(),
            r"(?i)\b(?:i\s?(?:morse|kväll|natt|eftermiddags|förmiddags)|på\s+(?:morgonen|förmiddagen|eftermiddagen|kvällen|natten)|(?:igår|i\s?går|idag|i\s?dag|imorgon|i\s?morgon)\s+(?:morgon(?:en)?|förmiddag(?:en)?|eftermiddag(?:en)?|kväll(?:en)?|natt(?:en)?))\b".to_string(),
            // Relative day/month/year words
            r"(?i)\b(?:yesterday|today|tomorrow|(?:last|next)\s+(?:week|month|year))\b".to_string(),
            r"(?i)\b(?:igår|i\s?går|idag|i\s?dag|imorgon|i\s?morgon|i\s?förrgår|i\s?övermorgon|i\s?fjol|(?:förra|nästa)\s+(?:vecka|veckan|månad|månaden|år|året))\b".to_string(),
            // Weekday with qualifier: "last Monday", "i måndags"
            r"(?i)\b(?:last|next|this|on)\s+(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b".to_string(),
            r"(?i)\b(?:i|på)\s+(?:måndag|tisdag|onsdag|torsdag|fredag|lördag|söndag)(?:s|en)?\b".to_string(),
            // Bare weekday name
            r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|(?:måndag|tisdag|onsdag|torsdag|fredag|lördag|söndag)(?:en|s)?)\b".to_string(),
            // Ordinal day: "24th", "den 3:e"
            r"(?i)\b(?:\d{1,2}(?:st|nd|rd|th)|(?:den\s+)?\d{1,2}:[ae])\b".to_string(),
            // Numeric duration: "2 days ago", "för tre veckor sedan"
            r"(?i)\b(?:\d+|an?|one|two|three|four|five|six|seven|eight|nine|ten)\s+(?:day|week|month|year|hour)s?\s+ago\b".to_string(),
            r"(?i)\bför\s+(?:\d+|en|ett|två|tre|fyra|fem|sex|sju|åtta|nio|tio)\s+(?:dag(?:ar)?|veckor?|vecka|månad(?:er)?|år|timmar?|timme)\s+sedan\b".to_string(),
            // Ordinal + month compound: "24th of May", "May 24", "24:e maj"
            format!(
                r"\b\d{{1,2}}(?:(?i:st|nd|rd|th)|:[ae])?\s+(?:(?i:of)\s+)?{MONTHS}\b"
            ),
            format!(r"\b{MONTHS}\s+\d{{1,2}}(?:(?i:st|nd|rd|th)|:[ae])?\b"),
        ];
        Ok(Self {
            patterns: compile_ordered(&sources)?,
        })
    }
}

impl IdentifierDetector for TemporalReferenceDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::TemporalReference
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
