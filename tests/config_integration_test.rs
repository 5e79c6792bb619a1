//! Integration tests for configuration loading

use std::io::Write;
use tempfile::NamedTempFile;
use vakt::config::{load_config, load_config_or_default, OutputFormat};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_round_trip() {
    let file = write_config(
        r#"
        [application]
        name = "vakt"
        log_level = "debug"

        [scan]
        output_format = "json"
        fail_on_detection = false

        [audit]
        enabled = false
        log_path = "/tmp/vakt-test/audit.log"
        json_format = false

        [logging]
        local_enabled = false
        local_path = "./logs"
        local_rotation = "hourly"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.scan.output_format, OutputFormat::Json);
    assert!(!config.scan.fail_on_detection);
    assert!(!config.audit.enabled);
    assert!(!config.audit.json_format);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_partial_config_uses_defaults() {
    let file = write_config(
        r#"
        [application]
        log_level = "warn"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    // Untouched sections fall back to defaults
    assert_eq!(config.scan.output_format, OutputFormat::Text);
    assert!(config.scan.fail_on_detection);
    assert!(config.audit.enabled);
}

#[test]
fn test_missing_file_errors_but_default_fallback_works() {
    assert!(load_config("/nonexistent/dir/vakt.toml").is_err());

    let config = load_config_or_default("/nonexistent/dir/vakt.toml").unwrap();
    assert_eq!(config.application.name, "vakt");
}

#[test]
fn test_invalid_log_level_rejected_on_load() {
    let file = write_config(
        r#"
        [application]
        log_level = "chatty"
        "#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_env_substitution_in_config_file() {
    std::env::set_var("VAKT_IT_SUBST_LEVEL", "error");
    let file = write_config(
        r#"
        [application]
        log_level = "${VAKT_IT_SUBST_LEVEL}"
        "#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "error");
    std::env::remove_var("VAKT_IT_SUBST_LEVEL");
}

#[test]
fn test_missing_env_substitution_errors() {
    let file = write_config(
        r#"
        [application]
        log_level = "${VAKT_IT_DEFINITELY_UNSET_VAR}"
        "#,
    );
    assert!(load_config(file.path()).is_err());
}
