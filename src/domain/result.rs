//! Result type alias for Vakt
//!
//! This module provides a convenient Result type alias that uses VaktError
//! as the error type.

use super::errors::VaktError;

/// Result type alias for Vakt operations
///
/// # Examples
///
/// ```
/// use vakt::domain::result::Result;
/// use vakt::domain::errors::VaktError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(VaktError::Configuration("missing section".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, VaktError>;
