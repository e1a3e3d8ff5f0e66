// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics.
//!
//! Turns Figment extraction failures and settings-registry rejections into
//! miette diagnostics with source spans and "did you mean" suggestions
//! (Jaro-Winkler similarity).

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Similarity a candidate must exceed to be offered as a correction.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration or settings error with rendering hints for miette.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key in a TOML file or environment override.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(esct::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        /// Comma-separated keys accepted in the section.
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value of the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(esct::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    /// A required key was absent.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(esct::config::missing_key),
        help("add `{key} = <value>` to your esct.toml")
    )]
    MissingKey { key: String },

    /// A semantic check on a loaded config failed.
    #[error("validation error: {message}")]
    #[diagnostic(code(esct::config::validation))]
    Validation { message: String },

    /// A platform setting key is not in the registry.
    #[error("unknown platform setting `{key}`")]
    #[diagnostic(
        code(esct::settings::unknown),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownSetting {
        key: String,
        suggestion: Option<String>,
        valid_keys: String,
    },

    /// A platform setting value was rejected by its schema.
    #[error("invalid value for `{key}`: {message}")]
    #[diagnostic(code(esct::settings::invalid_value), help("expected {expected}"))]
    InvalidSetting {
        key: String,
        message: String,
        expected: String,
    },

    /// Anything Figment reports that has no dedicated variant.
    #[error("configuration error: {0}")]
    #[diagnostic(code(esct::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid keys: {valid_keys}"),
        None => format!("valid keys: {valid_keys}"),
    }
}

/// Convert every error inside a `figment::Error` into a diagnostic.
///
/// `toml_sources` are `(path, content)` pairs used to attach source spans to
/// unknown-key errors.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| match &error.kind {
            Kind::UnknownField(field, expected) => {
                let suggestion = suggest_key(field, expected);
                let (span, src) = locate_in_sources(&error, field, toml_sources);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                    valid_keys: expected.join(", "),
                    span,
                    src,
                }
            }
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: field.to_string(),
            },
            Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                key: error.path.join("."),
                detail: format!("found {actual}, expected {expected}"),
                expected: expected.to_string(),
            },
            _ => ConfigError::Other(error.to_string()),
        })
        .collect()
}

/// Attach a source span when the error came from one of the known TOML files.
fn locate_in_sources(
    error: &figment::error::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|source| match source {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });

    let Some(origin) = origin else {
        return (None, None);
    };
    let Some((path, content)) = toml_sources.iter().find(|(p, _)| *p == origin) else {
        return (None, None);
    };

    match find_key_offset(content, &error.path, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(path, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `field` in `content`, searched after the `[section]` header
/// named by the first element of `path` (or from the top for root keys).
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        None => 0,
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
    };

    let mut line_start = start;
    for line in content[start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(field) {
            let rest = rest.trim_start_matches([' ', '\t']);
            if rest.starts_with('=') {
                return Some(line_start + (line.len() - trimmed.len()));
            }
        }
        // Stop at the next table header.
        if trimmed.starts_with('[') && line_start != start {
            break;
        }
        line_start += line.len();
    }

    None
}

/// Best candidate above the similarity threshold, if any.
pub fn suggest_key(unknown: &str, valid_keys: &[&str]) -> Option<String> {
    valid_keys
        .iter()
        .map(|candidate| (strsim::jaro_winkler(unknown, candidate), *candidate))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}

/// Render diagnostics to stderr with miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        match handler.render_report(&mut buf, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{buf}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_key() {
        let valid = &["base_url", "timeout_secs"];
        assert_eq!(suggest_key("base_ur", valid), Some("base_url".to_string()));
        assert_eq!(
            suggest_key("timeout_sec", valid),
            Some("timeout_secs".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_unrelated_key() {
        let valid = &["base_url", "timeout_secs"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn finds_key_inside_its_section() {
        let content = "[logging]\nlog_level = \"info\"\n\n[api]\nbase_ur = \"x\"\n";
        let offset = find_key_offset(content, &["api".to_string()], "base_ur").unwrap();
        assert_eq!(&content[offset..offset + 7], "base_ur");
    }

    #[test]
    fn key_in_other_section_is_not_matched() {
        let content = "[api]\nbase_url = \"x\"\n\n[logging]\nlog_level = \"info\"\n";
        assert_eq!(
            find_key_offset(content, &["api".to_string()], "log_level"),
            None
        );
    }
}
