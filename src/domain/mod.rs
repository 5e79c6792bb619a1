//! Domain types for Vakt.
//!
//! This module contains the error hierarchy and the crate-wide [`Result`]
//! alias. The detection vocabulary itself (reasons, matches, aggregate
//! results) lives in [`crate::detection::models`], next to the detectors that
//! produce it.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VaktError>`]:
//!
//! ```rust,no_run
//! use vakt::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = vakt::config::load_config("vakt.toml")?;
//!     let _ = config;
//!     Ok(())
//! }
//! ```
//!
//! Note that the detection call path is total: [`crate::detection`] never
//! returns an error once the engine is built. Only engine construction
//! (pattern compilation) and the surrounding CLI plumbing are fallible.

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::VaktError;
pub use result::Result;
