//! Span allow-list engine
//!
//! Builds text regions that match "acceptable" non-identifying patterns —
//! decade expressions, explicit numeric ranges, and ranges suffixed with an
//! age unit — and answers whether a candidate match falls entirely inside one
//! of them. The precise-age detector uses this to avoid flagging the second
//! number of a legitimate range ("20-30 år") as a precise age.

use anyhow::{Context, Result};
use regex::Regex;

/// A half-open byte span `[start, end)` within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Whether this span fully contains `[start, end)`.
    pub fn contains(&self, start: usize, end: usize) -> bool {
        self.start <= start && end <= self.end
    }
}

/// Compiled set of acceptable-pattern matchers.
pub struct AllowList {
    patterns: Vec<Regex>,
}

impl AllowList {
    /// Compile the built-in acceptable patterns.
    pub fn new() -> Result<Self> {
        let sources = [
            // Decade expressions: "40s", "40's", "40-talet", "40-årsåldern"
            r"\b\d{1,2}0'?s\b",
            r"\b\d{1,2}0-(?:tal(?:et)?|årsåldern)\b",
            // Ranges explicitly suffixed with an age unit: "20-30 år", "20-30 years old"
            r"(?i)\b\d{1,3}\s*[-–—]\s*\d{1,3}\s*(?:års?(?:\s+gammal)?|years?(?:\s+old)?|y/?o)\b",
            // Explicit two-ended numeric ranges: "20-30", "20 – 30"
            r"\b\d{1,3}\s*[-–—]\s*\d{1,3}\b",
        ];

        let mut patterns = Vec::with_capacity(sources.len());
        for source in sources {
            let regex = Regex::new(source)
                .with_context(|| format!("Invalid allow-list pattern: {source}"))?;
            patterns.push(regex);
        }

        Ok(Self { patterns })
    }

    /// Record every acceptable-pattern match as a span.
    pub fn allowed_spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.find_iter(text) {
                spans.push(Span {
                    start: m.start(),
                    end: m.end(),
                });
            }
        }
        spans
    }
}

/// Returns true iff some allowed span fully contains `[start, end)`.
pub fn is_suppressed(start: usize, end: usize, spans: &[Span]) -> bool {
    spans.iter().any(|span| span.contains(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_for(text: &str) -> Vec<Span> {
        AllowList::new().unwrap().allowed_spans(text)
    }

    #[test]
    fn test_decade_expression_english() {
        let spans = spans_for("patient in their 40s with hypertension");
        assert_eq!(spans.len(), 1);
        let text = "patient in their 40s with hypertension";
        assert_eq!(&text[spans[0].start..spans[0].end], "40s");
    }

    #[test]
    fn test_decade_expression_swedish() {
        let text = "patient i 40-årsåldern, tidigare frisk";
        let spans = spans_for(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].start..spans[0].end], "40-årsåldern");
    }

    #[test]
    fn test_numeric_range() {
        let text = "blodtryck mellan 20-30 enheter";
        let spans = spans_for(text);
        assert!(spans.iter().any(|s| &text[s.start..s.end] == "20-30"));
    }

    #[test]
    fn test_range_with_age_unit_covers_trailing_unit() {
        let text = "ålder 20-30 år enligt anhörig";
        let spans = spans_for(text);
        // Both the bare range and the unit-suffixed range are recorded; the
        // unit-suffixed span must reach past "30" to cover "30 år".
        assert!(spans.iter().any(|s| &text[s.start..s.end] == "20-30 år"));
    }

    #[test]
    fn test_no_spans_in_plain_text() {
        assert!(spans_for("patient reports chest pain").is_empty());
    }

    #[test]
    fn test_is_suppressed_containment() {
        let spans = vec![Span { start: 10, end: 20 }];
        assert!(is_suppressed(10, 20, &spans));
        assert!(is_suppressed(12, 18, &spans));
        assert!(!is_suppressed(9, 15, &spans));
        assert!(!is_suppressed(15, 21, &spans));
        assert!(!is_suppressed(0, 5, &spans));
    }

    #[test]
    fn test_is_suppressed_empty_spans() {
        assert!(!is_suppressed(0, 4, &[]));
    }
}
