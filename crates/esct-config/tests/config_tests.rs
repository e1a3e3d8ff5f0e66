// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the ESCT configuration system.

use esct_config::diagnostic::ConfigError;
use esct_config::model::EsctConfig;
use esct_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};
use serial_test::serial;

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[api]
base_url = "https://esct.example.org/api"
timeout_secs = 20

[auth]
token_path = "/tmp/esct-token"

[logging]
log_level = "debug"

[dashboard]
include_content = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.api.base_url, "https://esct.example.org/api");
    assert_eq!(config.api.timeout_secs, Some(20));
    assert_eq!(config.auth.token_path.as_deref(), Some("/tmp/esct-token"));
    assert_eq!(
        config.auth.resolved_token_path(),
        std::path::PathBuf::from("/tmp/esct-token")
    );
    assert_eq!(config.logging.log_level, "debug");
    assert!(!config.dashboard.include_content);
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.api.base_url, "http://localhost:5000/api");
    assert!(config.api.timeout_secs.is_none());
    assert!(config.auth.token_path.is_none());
    assert_eq!(config.logging.log_level, "info");
    assert!(config.dashboard.include_content);
}

#[test]
fn defaults_match_default_impl() {
    let loaded = load_config_from_str("").unwrap();
    let built = EsctConfig::default();
    assert_eq!(loaded.api.base_url, built.api.base_url);
    assert_eq!(loaded.logging.log_level, built.logging.log_level);
}

#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[telemetry]
enabled = true
"#;
    let err = load_config_from_str(toml).expect_err("unknown section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("telemetry"),
        "error should mention the unknown section, got: {err_str}"
    );
}

#[test]
fn typo_produces_unknown_key_with_suggestion() {
    let toml = r#"
[api]
base_ur = "https://esct.example.org/api"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "base_ur"
                && suggestion.as_deref() == Some("base_url")
                && valid_keys.contains("timeout_secs")
        })
    });
    assert!(found, "expected UnknownKey for base_ur, got: {errors:?}");
}

#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[api]
timeout_secs = "soon"
"#;
    let errors = load_and_validate_str(toml).expect_err("should reject invalid type");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("timeout_secs"))),
        "got: {errors:?}"
    );
}

#[test]
fn semantic_validation_runs_after_load() {
    let toml = r#"
[api]
base_url = "localhost:5000"
"#;
    let errors = load_and_validate_str(toml).expect_err("scheme-less URL should fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("api.base_url"))
    ));
}

#[test]
fn unknown_key_diagnostic_renders() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "base_ur".to_string(),
        suggestion: Some("base_url".to_string()),
        valid_keys: "base_url, timeout_secs".to_string(),
        span: None,
        src: None,
    };

    assert!(error.code().is_some());
    let help = error.help().expect("help text").to_string();
    assert!(help.contains("did you mean `base_url`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("base_ur"));
}

#[test]
#[serial]
fn explicit_file_with_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("esct.toml");
    std::fs::write(
        &path,
        "[api]\nbase_url = \"https://file.example.org/api\"\n\n[logging]\nlog_level = \"warn\"\n",
    )
    .unwrap();

    // SAFETY: serialized with every other env-mutating test.
    unsafe { std::env::set_var("ESCT_LOGGING_LOG_LEVEL", "error") };
    let result = load_and_validate_path(&path);
    unsafe { std::env::remove_var("ESCT_LOGGING_LOG_LEVEL") };

    let config = result.expect("file config should validate");
    assert_eq!(config.api.base_url, "https://file.example.org/api");
    assert_eq!(config.logging.log_level, "error");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let errors = load_and_validate_path(&dir.path().join("absent.toml"))
        .expect_err("missing file should fail");
    assert!(matches!(&errors[0], ConfigError::Other(msg) if msg.contains("does not exist")));
}

#[test]
fn effective_config_prints_as_loadable_toml() {
    let mut config = EsctConfig::default();
    config.api.timeout_secs = Some(12);
    config.dashboard.include_content = false;

    let text = esct_config::to_toml(&config).unwrap();
    assert!(text.contains("[api]"));
    assert!(!text.contains("token_path"));

    let reloaded = load_config_from_str(&text).unwrap();
    assert_eq!(reloaded.api.timeout_secs, Some(12));
    assert!(!reloaded.dashboard.include_content);
}
