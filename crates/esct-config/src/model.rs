// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the ESCT client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a mistyped key is
//! reported at startup instead of silently ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EsctConfig {
    /// Where the ESCT API lives and how to reach it.
    #[serde(default)]
    pub api: ApiConfig,

    /// Session token persistence.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Member dashboard behavior.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// REST API connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, e.g. `https://esct.example.org/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. `None` keeps the HTTP client's default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

/// Token storage settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// File holding the bearer token. Defaults to `<data dir>/esct/token`.
    #[serde(default)]
    pub token_path: Option<String>,
}

impl AuthConfig {
    /// The token file to use, resolving the XDG default when unset.
    pub fn resolved_token_path(&self) -> PathBuf {
        match &self.token_path {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .map(|d| d.join("esct").join("token"))
                .unwrap_or_else(|| PathBuf::from(".esct-token")),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Level for the `esct` crates (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Member dashboard settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Also fetch gallery, news, and testimonials.
    #[serde(default = "default_include_content")]
    pub include_content: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            include_content: default_include_content(),
        }
    }
}

fn default_include_content() -> bool {
    true
}
