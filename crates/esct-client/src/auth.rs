// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session endpoints and token lifecycle.

use esct_core::types::User;
use esct_core::EsctError;
use secrecy::SecretString;
use tracing::info;

use crate::client::ApiClient;

impl ApiClient {
    /// `GET /auth/me`
    pub async fn me(&self) -> Result<User, EsctError> {
        self.fetch_one(&["auth", "me"], "user").await
    }

    /// Stores `token` and confirms it against `/auth/me`.
    ///
    /// The token is kept only if the server accepts it; a rejected token
    /// leaves the store signed out.
    pub async fn login_with_token(&self, token: SecretString) -> Result<User, EsctError> {
        self.tokens().set(token)?;
        match self.me().await {
            Ok(user) => {
                info!(user = user.display_name(), "signed in");
                Ok(user)
            }
            Err(e) => {
                self.tokens().clear()?;
                Err(e)
            }
        }
    }

    /// Forgets the stored token. There is no server-side session to end.
    pub fn logout(&self) -> Result<(), EsctError> {
        self.tokens().clear()?;
        info!("signed out");
        Ok(())
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.tokens().get(), Ok(Some(_)))
    }
}
