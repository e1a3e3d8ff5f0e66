// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the ESCT client toolkit.

use thiserror::Error;

/// The primary error type used across the ESCT crates.
#[derive(Debug, Error)]
pub enum EsctError {
    /// Configuration errors (bad base URL, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure: connection refused, DNS, TLS, timeout.
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API answered with a non-success status.
    ///
    /// `message` is the server's `message` field when the body carried one.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response body could not be decoded into the expected shape.
    #[error("decode error: {message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The auth token store could not be read or written.
    #[error("token store error: {message}")]
    TokenStore {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client-side validation rejected the input before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl EsctError {
    /// The message to show a user.
    ///
    /// API errors surface the server's own message verbatim; everything else
    /// uses the full display form.
    pub fn display_message(&self) -> String {
        match self {
            EsctError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            EsctError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
