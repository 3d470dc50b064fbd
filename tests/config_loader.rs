mod common;

use common::temp_config;
use taskdeck::config::{Config, ConfigError};

#[test]
fn missing_file_yields_defaults() {
    let (dir, _) = temp_config("");
    let path = dir.path().join("does-not-exist.toml");
    let config = Config::load_from(&path).expect("defaults for missing file");
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.timeout_seconds, 30);
    assert!(!config.api.offline);
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = temp_config(
        r#"[api]
base_url = "https://tasks.example.com"
timeout_seconds = 10
offline = false
"#,
    );
    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.api.base_url, "https://tasks.example.com");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.ui.tick_rate_ms, 250, "ui section defaults");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("this is not toml = [");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn empty_base_url_fails_validation() {
    let (_dir, path) = temp_config(
        r#"[api]
base_url = ""
timeout_seconds = 30
offline = false
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn non_http_base_url_fails_validation() {
    let (_dir, path) = temp_config(
        r#"[api]
base_url = "ftp://tasks.example.com"
timeout_seconds = 30
offline = false
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_timeout_fails_validation() {
    let (_dir, path) = temp_config(
        r#"[api]
base_url = "http://localhost:8000"
timeout_seconds = 0
offline = false
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn defaults_pass_validation() {
    Config::default().validate().expect("defaults are valid");
}
