// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `./esct.toml` > `~/.config/esct/esct.toml` > `/etc/esct/esct.toml`,
//! with `ESCT_*` environment variables overriding all files.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::EsctConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/esct/esct.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "esct.toml";

/// Per-user config file under the XDG config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("esct").join("esct.toml"))
}

/// Every file the standard hierarchy reads, lowest precedence first.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];
    if let Some(user) = user_config_path() {
        paths.push(user);
    }
    paths.push(PathBuf::from(LOCAL_CONFIG_FILE));
    paths
}

/// Build the standard Figment without extracting it.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/esct/esct.toml`
/// 3. `~/.config/esct/esct.toml`
/// 4. `./esct.toml`
/// 5. `ESCT_*` environment variables
pub fn build_figment() -> Figment {
    config_file_paths()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(EsctConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Load configuration from the standard hierarchy with env overrides.
pub fn load_config() -> Result<EsctConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from an inline TOML string over the defaults.
///
/// Environment variables are not consulted.
pub fn load_config_from_str(toml_content: &str) -> Result<EsctConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EsctConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env overrides.
pub fn load_config_from_path(path: &Path) -> Result<EsctConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(EsctConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// `ESCT_<SECTION>_<KEY>` to `section.key`.
///
/// Only the first underscore after a known section name becomes a dot, so
/// `ESCT_API_BASE_URL` maps to `api.base_url` and not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("ESCT_").map(|key| {
        let key_str = key.as_str();
        let mapped = ["api", "auth", "logging", "dashboard"]
            .iter()
            .find_map(|section| {
                key_str
                    .strip_prefix(section)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .map(|rest| format!("{section}.{rest}"))
            })
            .unwrap_or_else(|| key_str.to_string());
        mapped.into()
    })
}
