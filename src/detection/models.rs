//! Identifier detection data models
//!
//! The typed vocabulary shared by the detectors, the engine, and the callers
//! that consume detection results. All three types are immutable value
//! objects constructed once per detection call.

use serde::{Deserialize, Serialize};

/// Identifier category enumeration
///
/// A closed set of fourteen patient-identifying signal categories. The order
/// of variants mirrors the order the engine runs detectors in, which in turn
/// decides which reason appears first in an aggregate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierReason {
    /// Swedish personal or coordination number, `(YY)YYMMDD[-+]XXXX`
    SwedishPersonalNumber,
    /// Calendar date in numeric form, or a bare month-name mention
    Date,
    /// Relative or absolute temporal language (weekdays, "yesterday", durations)
    TemporalReference,
    /// Precise age statement ("47 years old", "ålder 47")
    PreciseAge,
    /// Two consecutive capitalized tokens
    FullName,
    /// Abbreviated first name plus surname ("J. Smith")
    InitialLastName,
    /// Name preceded by an explicit label ("Name:", "Namn:")
    NameLabel,
    /// Short name-like tag opening a line ("Anna: feeling better")
    NameTag,
    /// Name followed by a clinical reporting verb in running prose
    NameInProse,
    /// Patient ID, journal number, or medical record number
    PatientIdOrJournalNumber,
    /// Telephone number
    PhoneNumber,
    /// Email address
    Email,
    /// Street address or P.O. box
    Address,
    /// Ward and bed locator, optionally with a clock time
    WardBedTimestamp,
}

impl IdentifierReason {
    /// Every category, in the fixed order the engine evaluates them.
    pub const ALL: [IdentifierReason; 14] = [
        Self::SwedishPersonalNumber,
        Self::Date,
        Self::TemporalReference,
        Self::PreciseAge,
        Self::FullName,
        Self::InitialLastName,
        Self::NameLabel,
        Self::NameTag,
        Self::NameInProse,
        Self::PatientIdOrJournalNumber,
        Self::PhoneNumber,
        Self::Email,
        Self::Address,
        Self::WardBedTimestamp,
    ];

    /// Stable snake_case tag, identical to the serde representation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SwedishPersonalNumber => "swedish_personal_number",
            Self::Date => "date",
            Self::TemporalReference => "temporal_reference",
            Self::PreciseAge => "precise_age",
            Self::FullName => "full_name",
            Self::InitialLastName => "initial_last_name",
            Self::NameLabel => "name_label",
            Self::NameTag => "name_tag",
            Self::NameInProse => "name_in_prose",
            Self::PatientIdOrJournalNumber => "patient_id_or_journal_number",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
            Self::Address => "address",
            Self::WardBedTimestamp => "ward_bed_timestamp",
        }
    }

    /// Human-readable description used in CLI reports and user-facing
    /// rejection messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SwedishPersonalNumber => "Swedish personal/coordination number detected",
            Self::Date => "Date detected",
            Self::TemporalReference => "Temporal reference detected",
            Self::PreciseAge => "Precise age detected",
            Self::FullName => "Full name detected",
            Self::InitialLastName => "Initial and last name detected",
            Self::NameLabel => "Labeled name field detected",
            Self::NameTag => "Name tag line detected",
            Self::NameInProse => "Name in prose detected",
            Self::PatientIdOrJournalNumber => "Patient ID or journal number detected",
            Self::PhoneNumber => "Phone number detected",
            Self::Email => "Email address detected",
            Self::Address => "Address detected",
            Self::WardBedTimestamp => "Ward and bed locator detected",
        }
    }
}

impl std::fmt::Display for IdentifierReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single detected identifier
///
/// `text` is the exact substring of the input that triggered `reason` — a
/// literal slice of the original text, never a normalized or truncated form,
/// so callers can show it back to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierMatch {
    /// Category of the detected identifier
    pub reason: IdentifierReason,
    /// The literal matched substring
    pub text: String,
}

impl IdentifierMatch {
    /// Create a new identifier match
    pub fn new(reason: IdentifierReason, text: impl Into<String>) -> Self {
        Self {
            reason,
            text: text.into(),
        }
    }

    /// User-facing diagnostic line, e.g. `Precise age detected: 47 years old`.
    pub fn diagnostic(&self) -> String {
        format!("{}: {}", self.reason.description(), self.text)
    }
}

/// Aggregate outcome of a detection call
///
/// Invariant: `has_identifiers == !reasons.is_empty()`. `reasons` preserves
/// first-seen order with duplicates removed; `matches` holds at most one
/// entry per distinct `(reason, text)` pair, also in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierDetectionResult {
    /// Whether any identifying signal was found
    pub has_identifiers: bool,
    /// Distinct categories that fired, in first-seen order
    pub reasons: Vec<IdentifierReason>,
    /// Deduplicated matches, in first-seen order
    pub matches: Vec<IdentifierMatch>,
}

impl IdentifierDetectionResult {
    /// An empty (clean) result
    pub fn clean() -> Self {
        Self {
            has_identifiers: false,
            reasons: Vec::new(),
            matches: Vec::new(),
        }
    }

    /// Build a result from accumulated matches, deduplicating reasons and
    /// `(reason, text)` pairs while preserving first-seen order.
    pub fn from_matches(collected: Vec<IdentifierMatch>) -> Self {
        let mut reasons: Vec<IdentifierReason> = Vec::new();
        let mut matches: Vec<IdentifierMatch> = Vec::new();

        for m in collected {
            if !reasons.contains(&m.reason) {
                reasons.push(m.reason);
            }
            if !matches.contains(&m) {
                matches.push(m);
            }
        }

        Self {
            has_identifiers: !reasons.is_empty(),
            reasons,
            matches,
        }
    }

    /// Whether the upstream caller must reject the text
    pub fn is_blocked(&self) -> bool {
        self.has_identifiers
    }

    /// The first detected reason, used when a user-facing message picks a
    /// single headline cause.
    pub fn first_reason(&self) -> Option<IdentifierReason> {
        self.reasons.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_labels_are_snake_case_tags() {
        for reason in IdentifierReason::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.label()));
        }
    }

    #[test]
    fn test_all_lists_fourteen_distinct_reasons() {
        let mut labels: Vec<&str> = IdentifierReason::ALL.iter().map(|r| r.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 14);
    }

    #[test]
    fn test_clean_result_invariant() {
        let result = IdentifierDetectionResult::clean();
        assert!(!result.has_identifiers);
        assert!(result.reasons.is_empty());
        assert!(result.matches.is_empty());
        assert!(!result.is_blocked());
        assert_eq!(result.first_reason(), None);
    }

    #[test]
    fn test_from_matches_deduplicates_pairs() {
        let collected = vec![
            IdentifierMatch::new(IdentifierReason::Email, "a@b.se"),
            IdentifierMatch::new(IdentifierReason::Email, "a@b.se"),
            IdentifierMatch::new(IdentifierReason::Email, "c@d.se"),
        ];
        let result = IdentifierDetectionResult::from_matches(collected);

        assert!(result.has_identifiers);
        assert_eq!(result.reasons, vec![IdentifierReason::Email]);
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].text, "a@b.se");
        assert_eq!(result.matches[1].text, "c@d.se");
    }

    #[test]
    fn test_from_matches_preserves_first_seen_reason_order() {
        let collected = vec![
            IdentifierMatch::new(IdentifierReason::Date, "2024-01-15"),
            IdentifierMatch::new(IdentifierReason::Email, "a@b.se"),
            IdentifierMatch::new(IdentifierReason::Date, "in May"),
        ];
        let result = IdentifierDetectionResult::from_matches(collected);

        assert_eq!(
            result.reasons,
            vec![IdentifierReason::Date, IdentifierReason::Email]
        );
        assert_eq!(result.first_reason(), Some(IdentifierReason::Date));
        // Same reason, different text: both matches survive
        assert_eq!(result.matches.len(), 3);
    }

    #[test]
    fn test_diagnostic_format() {
        let m = IdentifierMatch::new(IdentifierReason::PreciseAge, "47 years old");
        assert_eq!(m.diagnostic(), "Precise age detected: 47 years old");
    }
}
