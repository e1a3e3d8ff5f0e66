// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::EsctConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a loaded configuration.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &EsctConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        errors.push(validation("api.base_url must not be empty".to_string()));
    } else {
        match base_url
            .strip_prefix("https://")
            .or_else(|| base_url.strip_prefix("http://"))
        {
            None => errors.push(validation(format!(
                "api.base_url `{base_url}` must start with http:// or https://"
            ))),
            Some(rest) if rest.split('/').next().is_none_or(str::is_empty) => {
                errors.push(validation(format!("api.base_url `{base_url}` has no host")));
            }
            Some(_) => {}
        }
    }

    if config.api.timeout_secs == Some(0) {
        errors.push(validation(
            "api.timeout_secs must be at least 1 when set".to_string(),
        ));
    }

    let level = config.logging.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(validation(format!(
            "logging.log_level `{}` is not one of {}",
            config.logging.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    if let Some(path) = &config.auth.token_path {
        if path.trim().is_empty() {
            errors.push(validation(
                "auth.token_path must not be empty when set".to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: String) -> ConfigError {
    ConfigError::Validation { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&EsctConfig::default()).is_ok());
    }

    #[test]
    fn base_url_needs_scheme_and_host() {
        let mut config = EsctConfig::default();
        config.api.base_url = "esct.example.org/api".to_string();
        assert!(has_message(&validate_config(&config).unwrap_err(), "must start with"));

        config.api.base_url = "https:///api".to_string();
        assert!(has_message(&validate_config(&config).unwrap_err(), "has no host"));

        config.api.base_url = "  ".to_string();
        assert!(has_message(&validate_config(&config).unwrap_err(), "must not be empty"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = EsctConfig::default();
        config.api.timeout_secs = Some(0);
        assert!(has_message(&validate_config(&config).unwrap_err(), "timeout_secs"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let mut config = EsctConfig::default();
        config.logging.log_level = "verbose".to_string();
        assert!(has_message(&validate_config(&config).unwrap_err(), "log_level"));
    }

    #[test]
    fn all_problems_are_reported_together() {
        let mut config = EsctConfig::default();
        config.api.base_url = "ftp://x".to_string();
        config.logging.log_level = "loud".to_string();
        config.auth.token_path = Some(String::new());
        assert_eq!(validate_config(&config).unwrap_err().len(), 3);
    }
}
