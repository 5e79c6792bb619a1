//! Detection engine
//!
//! Runs every category detector against the input in a fixed priority order
//! and assembles the aggregate result. The engine is stateless after
//! construction: a call operates only on its input and allocates only
//! invocation-local data, so concurrent calls never interact.

use crate::detection::detectors::{build_detectors, IdentifierDetector};
use crate::detection::models::{IdentifierDetectionResult, IdentifierMatch};
use anyhow::{Context, Result};
use std::sync::OnceLock;

/// Orchestrates the fourteen category detectors.
///
/// Construction compiles every pattern once; the engine is `Send + Sync`
/// and can be shared across threads behind an `Arc` or a static.
///
/// # Examples
///
/// ```
/// use vakt::detection::DetectionEngine;
///
/// let engine = DetectionEngine::new()?;
/// let result = engine.detect("Patient reports chest pain.");
/// assert!(!result.has_identifiers);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct DetectionEngine {
    detectors: Vec<Box<dyn IdentifierDetector>>,
}

impl DetectionEngine {
    /// Build the engine, compiling all detector patterns.
    ///
    /// # Errors
    ///
    /// Returns an error only if a built-in pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            detectors: build_detectors().context("Failed to build category detectors")?,
        })
    }

    /// Scan `text` with every detector and aggregate the outcome.
    ///
    /// Total over any input: degenerate text simply produces an empty
    /// result. Calling this twice on the same string yields identical
    /// results.
    pub fn detect(&self, text: &str) -> IdentifierDetectionResult {
        let mut collected = Vec::new();

        for detector in &self.detectors {
            if let Some(matched) = detector.find_first(text) {
                // Log the category only; matched text never reaches the log.
                tracing::debug!(reason = %detector.reason(), "identifier detected");
                collected.push(IdentifierMatch::new(detector.reason(), matched));
            }
        }

        IdentifierDetectionResult::from_matches(collected)
    }
}

impl Default for DetectionEngine {
    fn default() -> Self {
        Self::new().expect("Failed to create default DetectionEngine")
    }
}

/// Detect identifiers using a process-wide shared engine.
///
/// This is the library entry point for callers that do not manage an engine
/// themselves. The engine is built on first use; the built-in patterns are
/// known-valid, so construction cannot fail at runtime.
///
/// # Examples
///
/// ```
/// use vakt::detection::detect_identifiers;
///
/// let result = detect_identifiers("Born 2024-01-15");
/// assert!(result.has_identifiers);
/// ```
pub fn detect_identifiers(text: &str) -> IdentifierDetectionResult {
    static ENGINE: OnceLock<DetectionEngine> = OnceLock::new();
    ENGINE
        .get_or_init(|| DetectionEngine::new().expect("built-in detector patterns are valid"))
        .detect(text)
}
