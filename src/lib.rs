// Vakt - Clinical Free-Text Identifier Gate
// Copyright (c) 2025 Vakt Contributors
// Licensed under the MIT License

//! # Vakt - Clinical Free-Text Identifier Gate
//!
//! Vakt decides whether a block of Swedish/English clinical free text
//! contains patient-identifying signals before the surrounding application
//! forwards it to an external text-generation service. It reports what it
//! found and where; it never modifies the text.
//!
//! ## Overview
//!
//! The detector covers fourteen identifier categories: Swedish personal and
//! coordination numbers, dates, temporal references, precise ages, four name
//! shapes plus names in prose, patient/journal identifiers, phone numbers,
//! email addresses, street addresses, and ward-bed locators. Detection is a
//! pure function of the input string — no I/O, no shared state, and no
//! failure modes once the engine is constructed.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Category detectors, allow-list suppression, engine,
//!   reporting, and the hashed audit trail
//! - [`config`] - Configuration management
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use vakt::detection::detect_identifiers;
//!
//! let result = detect_identifiers("Patient is 47 years old, ring 070-123 45 67");
//!
//! assert!(result.has_identifiers);
//! for m in &result.matches {
//!     // e.g. "Precise age detected: 47 years old"
//!     println!("{}", m.diagnostic());
//! }
//! ```
//!
//! Callers are expected to reject processing entirely when
//! `result.has_identifiers` is true, surfacing the reasons and matches to
//! the user, and to proceed only when it is false.
//!
//! ## Reusing the engine
//!
//! Pattern compilation happens once per [`detection::DetectionEngine`]. A
//! serving host should construct a single engine and share it; the engine is
//! `Send + Sync` and concurrent calls never interact:
//!
//! ```rust
//! use vakt::detection::DetectionEngine;
//!
//! let engine = DetectionEngine::new()?;
//! let first = engine.detect("ward 5 bed 12 at 08:15");
//! let second = engine.detect("vitals stable, no acute distress");
//!
//! assert!(first.has_identifiers);
//! assert!(!second.has_identifiers);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Logging
//!
//! Vakt uses structured logging with the `tracing` crate. Detection events
//! log category tags only; matched identifier text never reaches the logs,
//! and the audit trail stores SHA-256 hashes.

pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod logging;
