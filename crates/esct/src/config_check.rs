// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `esct config check` and `esct config show`.
//!
//! Configuration errors never get this far: loading renders them and exits.
//! Reaching here means the config is valid, so this prints what was resolved.

use esct_config::EsctConfig;
use esct_config::loader::config_file_paths;
use esct_core::EsctError;

pub fn run_check(config: &EsctConfig) {
    print!("{}", render(config, &existing_files()));
}

pub fn run_show(config: &EsctConfig) -> Result<(), EsctError> {
    let text = esct_config::to_toml(config).map_err(|e| EsctError::Config(e.to_string()))?;
    print!("{text}");
    Ok(())
}

fn existing_files() -> Vec<String> {
    config_file_paths()
        .into_iter()
        .filter(|p| p.is_file())
        .map(|p| p.display().to_string())
        .collect()
}

fn render(config: &EsctConfig, files: &[String]) -> String {
    let mut out = String::from("configuration is valid\n\n");
    if files.is_empty() {
        out.push_str("  files:           (none, using defaults)\n");
    } else {
        out.push_str(&format!("  files:           {}\n", files.join(", ")));
    }
    out.push_str(&format!("  api.base_url:    {}\n", config.api.base_url));
    out.push_str(&format!(
        "  api.timeout:     {}\n",
        config
            .api
            .timeout_secs
            .map(|s| format!("{s}s"))
            .unwrap_or_else(|| "client default".to_string())
    ));
    out.push_str(&format!(
        "  auth.token_path: {}\n",
        config.auth.resolved_token_path().display()
    ));
    out.push_str(&format!("  logging.level:   {}\n", config.logging.log_level));
    out.push_str(&format!(
        "  dashboard:       content feeds {}\n",
        if config.dashboard.include_content { "on" } else { "off" }
    ));
    out
}
