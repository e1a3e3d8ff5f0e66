// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the ESCT client toolkit.
//!
//! Two unrelated kinds of configuration live here:
//!
//! - the client's own settings (`esct.toml` + `ESCT_*` env vars), loaded with
//!   Figment, validated, and reported through miette diagnostics;
//! - the [`settings`] registry, the typed schema of the platform tunables an
//!   administrator edits on the server.
//!
//! # Usage
//!
//! ```no_run
//! use esct_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("API: {}", config.api.base_url);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod settings;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::EsctConfig;
pub use settings::{SettingCategory, SettingKind, SettingSpec, SettingValue, SettingsRegistry};

/// Load the standard hierarchy and validate it.
///
/// Figment errors are converted to diagnostics with source spans taken from
/// whichever config files exist on disk.
pub fn load_and_validate() -> Result<EsctConfig, Vec<ConfigError>> {
    finish(loader::load_config(), read_config_sources)
}

/// Load an inline TOML string over the defaults and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<EsctConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// Load one explicit file (plus env overrides) and validate it.
///
/// Unlike the standard hierarchy, a missing file is an error here.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<EsctConfig, Vec<ConfigError>> {
    if !path.is_file() {
        return Err(vec![ConfigError::Other(format!(
            "config file {} does not exist",
            path.display()
        ))]);
    }
    finish(loader::load_config_from_path(path), || {
        std::fs::read_to_string(path)
            .map(|content| vec![(path.display().to_string(), content)])
            .unwrap_or_default()
    })
}

/// The effective configuration as TOML, as `esct config show` prints it.
pub fn to_toml(config: &EsctConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::Other(e.to_string()))
}

#[allow(clippy::result_large_err)]
fn finish(
    loaded: Result<EsctConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<EsctConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Contents of every config file in the hierarchy that exists.
fn read_config_sources() -> Vec<(String, String)> {
    loader::config_file_paths()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            let display = std::fs::canonicalize(&path)
                .unwrap_or(path)
                .display()
                .to_string();
            Some((display, content))
        })
        .collect()
}
