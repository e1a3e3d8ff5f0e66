// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistent storage for the session bearer token.

use secrecy::SecretString;

use crate::error::EsctError;

/// Storage for the bearer token attached to API requests.
///
/// The client reads the token on every request, so a `set` or `clear` takes
/// effect on the next call without rebuilding the client.
pub trait AuthTokenStore: Send + Sync {
    /// Returns the stored token, or `None` when signed out.
    fn get(&self) -> Result<Option<SecretString>, EsctError>;

    /// Replaces the stored token.
    fn set(&self, token: SecretString) -> Result<(), EsctError>;

    /// Removes the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), EsctError>;
}
