//! Identifier detection for Vakt
//!
//! This module decides whether free clinical text contains patient-identifying
//! signals. It is a pure function of an input string to a structured result:
//! no I/O, no shared mutable state, no failure modes once the engine exists.
//!
//! # Architecture
//!
//! - **Detectors**: fourteen independent category detectors, each returning
//!   the first matching substring for its category
//! - **Allow-list**: span containment used to exempt non-identifying range
//!   and decade phrasing from age detection
//! - **Engine**: runs detectors in a fixed order and deduplicates the outcome
//! - **Report / Audit**: console+JSON reporting and hashed audit trail for
//!   the CLI surface
//!
//! # Usage
//!
//! ```
//! use vakt::detection::detect_identifiers;
//!
//! let result = detect_identifiers("Namn: Anna Lund, ses igen kl 14.30");
//! assert!(result.has_identifiers);
//! for m in &result.matches {
//!     println!("{}", m.diagnostic());
//! }
//! ```
//!
//! Upstream callers reject processing entirely when `has_identifiers` is
//! true and surface `reasons`/`matches` to the user; they proceed only when
//! it is false.

pub mod allowlist;
pub mod audit;
pub mod detectors;
pub mod engine;
pub mod models;
pub mod report;

// Re-export main types
pub use audit::AuditLogger;
pub use engine::{detect_identifiers, DetectionEngine};
pub use models::{IdentifierDetectionResult, IdentifierMatch, IdentifierReason};
pub use report::{ScanReport, ScanVerdict};
