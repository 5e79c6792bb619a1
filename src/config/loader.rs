//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{OutputFormat, VaktConfig};
use crate::domain::errors::VaktError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`VaktConfig`]
/// 4. Applies environment variable overrides (`VAKT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails,
/// a referenced environment variable is missing, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use vakt::config::load_config;
///
/// let config = load_config("vakt.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VaktConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VaktError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VaktError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: VaktConfig = toml::from_str(&contents)
        .map_err(|e| VaktError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config
        .validate()
        .map_err(|e| VaktError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// The CLI scan path uses this so a scan works out of the box; an explicit
/// `validate-config` still uses [`load_config`] and reports the missing file.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<VaktConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No configuration file, using defaults");
        let mut config = VaktConfig::default();
        apply_env_overrides(&mut config)?;
        config.validate().map_err(VaktError::Configuration)?;
        return Ok(config);
    }
    load_config(path)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
fn substitute_env_vars(contents: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z0-9_]+)\}")
        .map_err(|e| VaktError::Pattern(format!("Invalid substitution pattern: {e}")))?;

    let mut result = contents.to_string();
    for caps in re.captures_iter(contents) {
        let var_name = &caps[1];
        let value = std::env::var(var_name).map_err(|_| {
            VaktError::Configuration(format!("Environment variable not set: {var_name}"))
        })?;
        result = result.replace(&format!("${{{var_name}}}"), &value);
    }

    Ok(result)
}

/// Applies environment variable overrides with the `VAKT_` prefix
fn apply_env_overrides(config: &mut VaktConfig) -> Result<()> {
    if let Ok(val) = std::env::var("VAKT_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("VAKT_SCAN_OUTPUT_FORMAT") {
        config.scan.output_format = match val.to_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => {
                return Err(VaktError::Configuration(format!(
                    "Invalid VAKT_SCAN_OUTPUT_FORMAT: {val}"
                )))
            }
        };
    }

    if let Ok(val) = std::env::var("VAKT_SCAN_FAIL_ON_DETECTION") {
        config.scan.fail_on_detection = val.parse().map_err(|_| {
            VaktError::Configuration(format!("Invalid VAKT_SCAN_FAIL_ON_DETECTION: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("VAKT_AUDIT_ENABLED") {
        config.audit.enabled = val
            .parse()
            .map_err(|_| VaktError::Configuration(format!("Invalid VAKT_AUDIT_ENABLED: {val}")))?;
    }

    if let Ok(val) = std::env::var("VAKT_AUDIT_LOG_PATH") {
        config.audit.log_path = std::path::PathBuf::from(val);
    }

    if let Ok(val) = std::env::var("VAKT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            VaktError::Configuration(format!("Invalid VAKT_LOGGING_LOCAL_ENABLED: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("VAKT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/vakt.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config = load_config_or_default("/nonexistent/vakt.toml").unwrap();
        assert_eq!(config.application.name, "vakt");
    }

    #[test]
    fn test_load_config_valid_file() {
        let file = write_config(
            r#"
            [application]
            log_level = "debug"

            [scan]
            output_format = "json"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.scan.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let file = write_config("not [valid toml");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("VAKT_TEST_SUBST_VALUE", "warn");
        let substituted =
            substitute_env_vars("log_level = \"${VAKT_TEST_SUBST_VALUE}\"").unwrap();
        assert_eq!(substituted, "log_level = \"warn\"");
        std::env::remove_var("VAKT_TEST_SUBST_VALUE");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        assert!(substitute_env_vars("x = \"${VAKT_TEST_DEFINITELY_UNSET}\"").is_err());
    }
}
