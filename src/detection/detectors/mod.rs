//! Category detectors
//!
//! One detector per identifier category, each a pure function from text to
//! an optional first-matching substring. Detectors never error and never
//! mutate their input; they are safe to call in any order or repeatedly.
//!
//! Shared design rules:
//! - word-boundary discipline on every pattern, so digits embedded in longer
//!   numbers are not mistaken for years or ages
//! - bilingual English/Swedish pattern families tried as sibling alternatives
//! - sub-patterns ordered most-specific-first, first match wins

pub mod age;
pub mod contact;
pub mod dates;
pub mod names;
pub mod personal_number;
pub mod records;

use crate::detection::models::IdentifierReason;
use anyhow::Result;

/// Trait for identifier detectors
///
/// Implementations hold their compiled patterns and scan left-to-right,
/// returning the first matching substring as a literal slice of the input.
pub trait IdentifierDetector: Send + Sync {
    /// The category this detector reports
    fn reason(&self) -> IdentifierReason;

    /// Left-most matching substring, or `None` when the text is clean
    /// for this category.
    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str>;
}

/// Build every category detector in the fixed evaluation order.
///
/// The order matches [`IdentifierReason::ALL`] and decides which reason
/// appears first in an aggregate result.
pub fn build_detectors() -> Result<Vec<Box<dyn IdentifierDetector>>> {
    Ok(vec![
        Box::new(personal_number::PersonalNumberDetector::new()?),
        Box::new(dates::DateDetector::new()?),
        Box::new(dates::TemporalReferenceDetector::new()?),
        Box::new(age::PreciseAgeDetector::new()?),
        Box::new(names::FullNameDetector::new()?),
        Box::new(names::InitialLastNameDetector::new()?),
        Box::new(names::NameLabelDetector::new()?),
        Box::new(names::NameTagDetector::new()?),
        Box::new(names::NameInProseDetector::new()?),
        Box::new(records::PatientIdDetector::new()?),
        Box::new(contact::PhoneDetector::new()?),
        Box::new(contact::EmailDetector::new()?),
        Box::new(contact::AddressDetector::new()?),
        Box::new(records::WardBedDetector::new()?),
    ])
}
