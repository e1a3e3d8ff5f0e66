// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `esct login`, `esct logout`, `esct whoami`.

use esct_client::ApiClient;
use esct_core::{EsctError, User};
use secrecy::SecretString;
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WhoAmI<'a> {
    name: &'a str,
    ehrms_code: Option<&'a str>,
    email: Option<&'a str>,
    is_admin: bool,
    is_verified: bool,
    credit_score: Option<f64>,
}

impl<'a> From<&'a User> for WhoAmI<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            name: user.display_name(),
            ehrms_code: user.ehrms_code.as_deref(),
            email: user.personal_details.email.as_deref(),
            is_admin: user.is_admin,
            is_verified: user.is_verified,
            credit_score: user.credit_score,
        }
    }
}

pub async fn run_login(client: &ApiClient, token: String) -> Result<(), EsctError> {
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(EsctError::Validation("token must not be empty".into()));
    }
    let user = client.login_with_token(SecretString::from(token)).await?;
    println!("Signed in as {}", user.display_name());
    Ok(())
}

pub fn run_logout(client: &ApiClient) -> Result<(), EsctError> {
    client.logout()?;
    println!("Signed out");
    Ok(())
}

pub async fn run_whoami(client: &ApiClient, json: bool) -> Result<(), EsctError> {
    if !client.is_signed_in() {
        return Err(EsctError::Validation(
            "not signed in; run `esct login --token <TOKEN>`".into(),
        ));
    }
    let user = client.me().await?;
    if json {
        return output::print_json(&WhoAmI::from(&user));
    }

    println!("{}", user.display_name());
    if let Some(code) = user.ehrms_code.as_deref() {
        println!("  EHRMS code:   {code}");
    }
    if let Some(email) = user.personal_details.email.as_deref() {
        println!("  Email:        {email}");
    }
    println!(
        "  Role:         {}",
        if user.is_admin { "administrator" } else { "member" }
    );
    println!(
        "  Verified:     {}",
        if user.is_verified { "yes" } else { "no" }
    );
    if let Some(score) = user.credit_score {
        println!("  Credit score: {score}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use esct_test_utils::fixtures::user;

    #[test]
    fn whoami_json_shape() {
        let mut member = user("u1", "Asha Rao");
        member.credit_score = Some(72.5);
        let json = serde_json::to_value(WhoAmI::from(&member)).unwrap();
        assert_eq!(json["name"], "Asha Rao");
        assert_eq!(json["isAdmin"], false);
        assert_eq!(json["creditScore"], 72.5);
    }
}
