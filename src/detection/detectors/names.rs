//! Name detectors
//!
//! Five sibling categories cover the ways a person's name shows up in
//! clinical text: two consecutive capitalized tokens, an abbreviated
//! initial+surname, an explicitly labeled name field, a name-like tag
//! opening a line, and a name directly followed by a clinical reporting
//! verb in running prose.

use crate::detection::detectors::IdentifierDetector;
use crate::detection::models::IdentifierReason;
use anyhow::{Context, Result};
use fancy_regex::Regex as FancyRegex;
use regex::Regex;

/// Label tokens that introduce a name field. Also rejected when they appear
/// reflexively as the "name" itself ("Patient: patient").
const LABEL_WORDS: [&str; 4] = ["name", "namn", "patient", "pat"];

/// Line tags that are clinical structure, not names.
const NON_NAME_TAGS: [&str; 56] = [
    "adress", "af", "aktuellt", "allergi", "allergier", "allergies", "anamnes", "assessment",
    "bedömning", "besök", "bp", "bt", "diagnos", "diagnosis", "ecg", "ekg", "epost", "hr",
    "kontakt", "lab", "labb", "läkemedel", "mail", "medication", "medications", "medicin",
    "mediciner", "mobil", "name", "namn", "news", "news2", "note", "notering", "objektivt",
    "obs", "ordination", "pat", "patient", "plan", "pox", "prover", "puls", "pulse", "resp",
    "rr", "sat", "status", "subjektivt", "tel", "telefon", "temp", "uppföljning", "vitals",
    "åtgärd", "åtgärder",
];

/// First-position words that open clinical prose without being names.
const NON_NAME_WORDS: [&str; 24] = [
    "patient", "patienten", "pat", "pt", "the", "she", "he", "they", "it", "hon", "han", "hen",
    "vi", "jag", "man", "denna", "denne", "det", "den", "dr", "doktor", "name", "namn", "anhörig",
];

/// Closed vocabulary of clinical reporting verbs that follow a name in prose.
const REPORTING_VERBS: [&str; 21] = [
    "reports", "denies", "presents", "states", "complains", "describes", "admits", "confirms",
    "mentions", "uppger", "söker", "nekar", "förnekar", "berättar", "beskriver", "anger",
    "klagar", "medger", "inkommer", "uppvisar", "upplever",
];

fn is_all_caps(token: &str) -> bool {
    token.chars().count() > 1 && !token.chars().any(|c| c.is_lowercase())
}

/// Detector for two consecutive capitalized tokens, each optionally a
/// hyphenated compound.
pub struct FullNameDetector {
    pattern: Regex,
}

impl FullNameDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"\b\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)?\s+\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)?\b",
        )
        .context("Invalid full name pattern")?;
        Ok(Self { pattern })
    }
}

impl IdentifierDetector for FullNameDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::FullName
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}

/// Detector for an abbreviated first name plus surname ("J. Smith").
pub struct InitialLastNameDetector {
    pattern: Regex,
}

impl InitialLastNameDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\b\p{Lu}\.\s?\p{Lu}\p{Ll}+(?:-\p{Lu}\p{Ll}+)?\b")
            .context("Invalid initial+last name pattern")?;
        Ok(Self { pattern })
    }
}

impl IdentifierDetector for InitialLastNameDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::InitialLastName
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }
}

/// Detector for explicitly labeled name fields ("Name: John Smith").
///
/// Reports the name tokens, not the label. The look-ahead rejects label
/// words used reflexively; token validation rejects digits and all-caps
/// acronyms. A hyphen separator must be followed by whitespace so compound
/// words like "patient-centered" stay clean.
pub struct NameLabelDetector {
    pattern: FancyRegex,
}

impl NameLabelDetector {
    pub fn new() -> Result<Self> {
        let pattern = FancyRegex::new(
            r"(?i)\b(?:name|namn|patient|pat)(?:\s*:\s*|\s*-\s+)(?!(?:name|namn|patient|pat)\b)(\p{L}[\p{L}-]*(?:[ \t]+\p{L}[\p{L}-]*)?)",
        )
        .context("Invalid name label pattern")?;
        Ok(Self { pattern })
    }

    fn acceptable_token(token: &str) -> bool {
        token.chars().count() >= 2
            && !is_all_caps(token)
            && !LABEL_WORDS.contains(&token.to_lowercase().as_str())
    }
}

impl IdentifierDetector for NameLabelDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::NameLabel
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        for caps in self.pattern.captures_iter(text).flatten() {
            let group = match caps.get(1) {
                Some(g) => g,
                None => continue,
            };
            let slice = group.as_str();

            let (first, rest) = match slice.find(char::is_whitespace) {
                Some(i) => (&slice[..i], Some(slice[i..].trim_start())),
                None => (slice, None),
            };
            if !Self::acceptable_token(first) {
                continue;
            }
            return match rest {
                Some(second) if Self::acceptable_token(second) => Some(slice),
                // Second token is noise; report only the valid first token.
                Some(_) => Some(&text[group.start()..group.start() + first.len()]),
                None => Some(slice),
            };
        }
        None
    }
}

/// Detector for name-like tags opening a physical line ("Anna: mår bra").
///
/// Rejects known clinical tags, all-caps acronyms, and all-caps lines.
pub struct NameTagDetector {
    pattern: Regex,
}

impl NameTagDetector {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(
            r"(?m)^[ \t]*(\p{L}{2,}(?:[- ]\p{L}{2,})?):[ \t]*\S",
        )
        .context("Invalid name tag pattern")?;
        Ok(Self { pattern })
    }

    fn acceptable_tag(tag: &str) -> bool {
        if is_all_caps(tag) {
            return false;
        }
        tag.split(['-', ' '])
            .all(|part| !NON_NAME_TAGS.contains(&part.to_lowercase().as_str()))
    }

    fn line_is_all_caps(text: &str, at: usize) -> bool {
        let line_start = text[..at].rfind('\n').map_or(0, |i| i + 1);
        let line_end = text[at..].find('\n').map_or(text.len(), |i| at + i);
        let line = &text[line_start..line_end];
        line.chars().any(|c| c.is_uppercase()) && !line.chars().any(|c| c.is_lowercase())
    }
}

impl IdentifierDetector for NameTagDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::NameTag
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        for caps in self.pattern.captures_iter(text) {
            let group = match caps.get(1) {
                Some(g) => g,
                None => continue,
            };
            if !Self::acceptable_tag(group.as_str()) {
                continue;
            }
            if Self::line_is_all_caps(text, group.start()) {
                continue;
            }
            return Some(group.as_str());
        }
        None
    }
}

/// Detector for a name opening a sentence-like chunk and immediately
/// followed by a clinical reporting verb ("Andersson uppger ...").
pub struct NameInProseDetector {
    token: Regex,
}

impl NameInProseDetector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            token: Regex::new(r"\S+").context("Invalid token pattern")?,
        })
    }

    fn name_like(token: &str) -> bool {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        first.is_uppercase()
            && token.chars().count() >= 2
            && token.chars().all(|c| c.is_alphabetic() || c == '-')
            && token.chars().any(|c| c.is_lowercase())
            && !NON_NAME_WORDS.contains(&token.to_lowercase().as_str())
    }

    fn is_reporting_verb(token: &str) -> bool {
        let trimmed = token.trim_end_matches(|c: char| !c.is_alphabetic());
        REPORTING_VERBS.contains(&trimmed.to_lowercase().as_str())
    }

    /// Trim trailing punctuation off a token span, returning the shrunk end.
    fn trimmed_end(text: &str, start: usize, end: usize) -> usize {
        let token = &text[start..end];
        let trimmed = token.trim_end_matches(|c: char| !c.is_alphabetic());
        start + trimmed.len()
    }

    fn scan_chunk<'t>(&self, text: &'t str, base: usize, chunk: &str) -> Option<&'t str> {
        let tokens: Vec<(usize, usize)> = self
            .token
            .find_iter(chunk)
            .take(3)
            .map(|m| (base + m.start(), base + m.end()))
            .collect();

        let token_at = |i: usize| {
            let (start, end) = tokens[i];
            let end = Self::trimmed_end(text, start, end);
            (start, end, &text[start..end])
        };

        if tokens.len() >= 2 {
            let (start, end, first) = token_at(0);
            if Self::name_like(first) {
                let (_, _, second_raw) = token_at(1);
                if Self::is_reporting_verb(second_raw) {
                    return Some(&text[start..end]);
                }
                if tokens.len() >= 3 && Self::name_like(second_raw) {
                    let (_, second_end, _) = token_at(1);
                    let (_, _, third) = token_at(2);
                    if Self::is_reporting_verb(third) {
                        return Some(&text[start..second_end]);
                    }
                }
            }
        }
        None
    }
}

impl IdentifierDetector for NameInProseDetector {
    fn reason(&self) -> IdentifierReason {
        IdentifierReason::NameInProse
    }

    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        let mut chunk_start = 0usize;
        for (idx, ch) in text.char_indices() {
            if matches!(ch, '.' | '!' | '?' | ';' | '\n') {
                if let Some(hit) = self.scan_chunk(text, chunk_start, &text[chunk_start..idx]) {
                    return Some(hit);
                }
                chunk_start = idx + ch.len_utf8();
            }
        }
        self.scan_chunk(text, chunk_start, &text[chunk_start..])
    }
}
