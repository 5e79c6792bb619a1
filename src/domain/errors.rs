//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Vakt error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific failure classes and provides context for error handling.
#[derive(Debug, Error)]
pub enum VaktError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Detection pattern compilation errors
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VaktError {
    fn from(err: std::io::Error) -> Self {
        VaktError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VaktError {
    fn from(err: serde_json::Error) -> Self {
        VaktError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VaktError {
    fn from(err: toml::de::Error) -> Self {
        VaktError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from regex compile errors
impl From<regex::Error> for VaktError {
    fn from(err: regex::Error) -> Self {
        VaktError::Pattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vakt_error_display() {
        let err = VaktError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let vakt_err: VaktError = io_err.into();
        assert!(matches!(vakt_err, VaktError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let vakt_err: VaktError = json_err.into();
        assert!(matches!(vakt_err, VaktError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let vakt_err: VaktError = toml_err.into();
        assert!(matches!(vakt_err, VaktError::Configuration(_)));
        assert!(vakt_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let vakt_err: VaktError = regex_err.into();
        assert!(matches!(vakt_err, VaktError::Pattern(_)));
    }

    #[test]
    fn test_vakt_error_implements_std_error() {
        let err = VaktError::Pattern("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
