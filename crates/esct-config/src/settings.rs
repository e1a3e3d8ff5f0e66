// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of platform-wide tunables editable by administrators.
//!
//! The server stores settings as a flat `key -> value` table
//! (`GET /admin/config`, `PUT /admin/config/:key`). This registry is the
//! client-side schema for that table: every known key with its value type,
//! bounds, and category. Values are checked here before an update is sent.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::diagnostic::{suggest_key, ConfigError};

/// Value type and bounds of a setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingKind {
    Integer { min: i64, max: i64 },
    Number { min: f64, max: f64 },
    Boolean,
    Text { max_len: usize },
}

impl SettingKind {
    /// What a valid value looks like, for error help text.
    pub fn describe(&self) -> String {
        match self {
            SettingKind::Integer { min, max } => format!("an integer between {min} and {max}"),
            SettingKind::Number { min, max } => format!("a number between {min} and {max}"),
            SettingKind::Boolean => "true or false".to_string(),
            SettingKind::Text { max_len } => format!("text of at most {max_len} characters"),
        }
    }
}

/// Grouping used by the admin settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingCategory {
    Donations,
    Claims,
    Payments,
    Credit,
    Security,
    System,
}

impl SettingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingCategory::Donations => "donations",
            SettingCategory::Claims => "claims",
            SettingCategory::Payments => "payments",
            SettingCategory::Credit => "credit",
            SettingCategory::Security => "security",
            SettingCategory::System => "system",
        }
    }
}

impl fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema entry for one setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingSpec {
    pub key: &'static str,
    pub kind: SettingKind,
    pub category: SettingCategory,
    pub description: &'static str,
}

/// A value that passed its schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl SettingValue {
    pub fn to_json(&self) -> Value {
        match self {
            SettingValue::Integer(n) => Value::from(*n),
            SettingValue::Number(n) => Value::from(*n),
            SettingValue::Boolean(b) => Value::Bool(*b),
            SettingValue::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Integer(n) => write!(f, "{n}"),
            SettingValue::Number(n) => write!(f, "{n}"),
            SettingValue::Boolean(b) => write!(f, "{b}"),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

const fn int(
    key: &'static str,
    category: SettingCategory,
    min: i64,
    max: i64,
    description: &'static str,
) -> SettingSpec {
    SettingSpec {
        key,
        kind: SettingKind::Integer { min, max },
        category,
        description,
    }
}

const fn num(
    key: &'static str,
    category: SettingCategory,
    min: f64,
    max: f64,
    description: &'static str,
) -> SettingSpec {
    SettingSpec {
        key,
        kind: SettingKind::Number { min, max },
        category,
        description,
    }
}

const fn flag(key: &'static str, category: SettingCategory, description: &'static str) -> SettingSpec {
    SettingSpec {
        key,
        kind: SettingKind::Boolean,
        category,
        description,
    }
}

const fn text(
    key: &'static str,
    category: SettingCategory,
    max_len: usize,
    description: &'static str,
) -> SettingSpec {
    SettingSpec {
        key,
        kind: SettingKind::Text { max_len },
        category,
        description,
    }
}

use SettingCategory::{Claims, Credit, Donations, Payments, Security, System};

/// The tunables the platform ships with.
pub const STANDARD_SETTINGS: &[SettingSpec] = &[
    num("min_donation_amount", Donations, 1.0, 100_000.0, "Smallest single donation accepted"),
    num("max_donation_amount", Donations, 1.0, 10_000_000.0, "Largest single donation accepted"),
    int("donation_queue_limit", Donations, 1, 100, "Claims a member may hold in their donation queue"),
    int("monthly_donation_target", Donations, 0, 1_000, "Donations a member is expected to complete each month"),
    int("donation_reminder_day", Donations, 1, 28, "Day of month reminders are sent"),
    num("death_during_service_amount", Claims, 0.0, 10_000_000.0, "Default goal for Death During Service claims"),
    num("death_after_service_amount", Claims, 0.0, 10_000_000.0, "Default goal for Death After Service claims"),
    num("retirement_farewell_amount", Claims, 0.0, 10_000_000.0, "Default goal for Retirement Farewell claims"),
    num("daughters_marriage_amount", Claims, 0.0, 10_000_000.0, "Default goal for Daughters Marriage claims"),
    num("medical_claim_max_amount", Claims, 0.0, 10_000_000.0, "Ceiling for Medical Claim goals"),
    int("claim_verification_days", Claims, 1, 90, "Days an admin has to verify a new claim"),
    int("max_active_claims_per_user", Claims, 1, 20, "Open claims a member may raise at once"),
    int("min_membership_months_for_claim", Claims, 0, 120, "Membership age required before raising a claim"),
    num("platform_fee_percent", Payments, 0.0, 100.0, "Platform fee taken from each donation"),
    num("gateway_fee_percent", Payments, 0.0, 100.0, "Payment gateway fee passed on to donors"),
    int("payment_timeout_minutes", Payments, 1, 1_440, "Minutes before an unpaid order expires"),
    text("payment_currency", Payments, 3, "ISO 4217 currency code for orders"),
    int("initial_credit_score", Credit, 0, 1_000, "Credit score assigned to new members"),
    int("min_credit_score_for_claim", Credit, 0, 1_000, "Credit score needed to raise a claim"),
    int("on_time_donation_reward", Credit, 0, 100, "Credit added for an on-time monthly donation"),
    int("late_donation_penalty", Credit, 0, 100, "Credit removed for a late monthly donation"),
    int("missed_donation_penalty", Credit, 0, 200, "Credit removed for a missed monthly donation"),
    int("rate_limit_window_minutes", Security, 1, 1_440, "Length of the API rate-limit window"),
    int("rate_limit_max_requests", Security, 1, 100_000, "Requests allowed per rate-limit window"),
    int("max_login_attempts", Security, 1, 20, "Failed logins before an account is locked"),
    int("otp_expiry_minutes", Security, 1, 60, "Lifetime of a one-time password"),
    int("session_timeout_hours", Security, 1, 720, "Lifetime of a login session"),
    flag("maintenance_mode", System, "Reject member traffic while maintenance is under way"),
    flag("registration_open", System, "Accept new member registrations"),
    text("support_email", System, 254, "Address shown to members for support"),
];

/// Typed schema for the server's settings table.
#[derive(Debug, Clone)]
pub struct SettingsRegistry {
    specs: BTreeMap<&'static str, SettingSpec>,
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl SettingsRegistry {
    /// Registry holding [`STANDARD_SETTINGS`].
    pub fn standard() -> Self {
        Self::from_specs(STANDARD_SETTINGS.iter().copied())
    }

    /// Registry from an explicit list. Later duplicates replace earlier ones.
    pub fn from_specs(specs: impl IntoIterator<Item = SettingSpec>) -> Self {
        Self {
            specs: specs.into_iter().map(|spec| (spec.key, spec)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&SettingSpec> {
        self.specs.get(key)
    }

    /// All specs, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = &SettingSpec> {
        self.specs.values()
    }

    /// Specs in one category, ordered by key.
    pub fn in_category(&self, category: SettingCategory) -> impl Iterator<Item = &SettingSpec> {
        self.specs.values().filter(move |spec| spec.category == category)
    }

    /// Look up a key, suggesting the closest known key when it is missing.
    pub fn lookup(&self, key: &str) -> Result<&SettingSpec, ConfigError> {
        self.specs.get(key).ok_or_else(|| {
            let known: Vec<&str> = self.specs.keys().copied().collect();
            ConfigError::UnknownSetting {
                key: key.to_string(),
                suggestion: suggest_key(key, &known),
                valid_keys: known.join(", "),
            }
        })
    }

    /// Check a JSON value against the key's schema.
    ///
    /// Numeric strings and `"true"`/`"false"` are accepted for numeric and
    /// boolean settings, since that is how values arrive from forms and CLIs.
    pub fn validate(&self, key: &str, value: &Value) -> Result<SettingValue, ConfigError> {
        let spec = self.lookup(key)?;
        let invalid = |message: String| ConfigError::InvalidSetting {
            key: key.to_string(),
            message,
            expected: spec.kind.describe(),
        };

        match spec.kind {
            SettingKind::Integer { min, max } => {
                let n = as_integer(value)
                    .ok_or_else(|| invalid(format!("`{value}` is not an integer")))?;
                if n < min || n > max {
                    return Err(invalid(format!("{n} is out of range")));
                }
                Ok(SettingValue::Integer(n))
            }
            SettingKind::Number { min, max } => {
                let n = as_number(value)
                    .ok_or_else(|| invalid(format!("`{value}` is not a number")))?;
                if n < min || n > max {
                    return Err(invalid(format!("{n} is out of range")));
                }
                Ok(SettingValue::Number(n))
            }
            SettingKind::Boolean => as_bool(value)
                .map(SettingValue::Boolean)
                .ok_or_else(|| invalid(format!("`{value}` is not a boolean"))),
            SettingKind::Text { max_len } => {
                let Value::String(s) = value else {
                    return Err(invalid(format!("`{value}` is not text")));
                };
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(invalid("value must not be empty".to_string()));
                }
                if trimmed.chars().count() > max_len {
                    return Err(invalid(format!(
                        "value is {} characters long",
                        trimmed.chars().count()
                    )));
                }
                Ok(SettingValue::Text(trimmed.to_string()))
            }
        }
    }

    /// Parse a raw command-line value for `key`.
    pub fn parse(&self, key: &str, raw: &str) -> Result<SettingValue, ConfigError> {
        self.validate(key, &Value::String(raw.to_string()))
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|f| f.is_finite())
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn standard_registry_has_no_duplicate_keys() {
        assert_eq!(SettingsRegistry::standard().len(), STANDARD_SETTINGS.len());
    }

    #[test]
    fn every_category_is_populated() {
        let registry = SettingsRegistry::standard();
        for category in [Donations, Claims, Payments, Credit, Security, System] {
            assert!(
                registry.in_category(category).next().is_some(),
                "{category} has no settings"
            );
        }
    }

    #[test]
    fn integer_setting_accepts_numbers_and_numeric_strings() {
        let registry = SettingsRegistry::standard();
        assert_eq!(
            registry.validate("max_login_attempts", &json!(5)).unwrap(),
            SettingValue::Integer(5)
        );
        assert_eq!(
            registry.parse("max_login_attempts", " 7 ").unwrap(),
            SettingValue::Integer(7)
        );
        assert_eq!(
            registry.validate("max_login_attempts", &json!(6.0)).unwrap(),
            SettingValue::Integer(6)
        );
    }

    #[test]
    fn integer_setting_rejects_out_of_range_and_fractions() {
        let registry = SettingsRegistry::standard();
        let err = registry.validate("max_login_attempts", &json!(50)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { ref message, .. } if message.contains("out of range")));
        assert!(registry.validate("max_login_attempts", &json!(2.5)).is_err());
        assert!(registry.parse("max_login_attempts", "many").is_err());
    }

    #[test]
    fn number_setting_checks_bounds() {
        let registry = SettingsRegistry::standard();
        assert_eq!(
            registry.parse("platform_fee_percent", "2.5").unwrap(),
            SettingValue::Number(2.5)
        );
        assert!(registry.parse("platform_fee_percent", "101").is_err());
        assert!(registry.parse("platform_fee_percent", "NaN").is_err());
    }

    #[test]
    fn boolean_setting_accepts_common_spellings() {
        let registry = SettingsRegistry::standard();
        assert_eq!(
            registry.parse("maintenance_mode", "on").unwrap(),
            SettingValue::Boolean(true)
        );
        assert_eq!(
            registry.validate("maintenance_mode", &json!(false)).unwrap(),
            SettingValue::Boolean(false)
        );
        assert!(registry.parse("maintenance_mode", "maybe").is_err());
    }

    #[test]
    fn text_setting_enforces_length() {
        let registry = SettingsRegistry::standard();
        assert_eq!(
            registry.parse("payment_currency", "INR").unwrap(),
            SettingValue::Text("INR".into())
        );
        assert!(registry.parse("payment_currency", "RUPEE").is_err());
        assert!(registry.parse("support_email", "   ").is_err());
        assert!(registry.validate("support_email", &json!(12)).is_err());
    }

    #[test]
    fn unknown_key_suggests_neighbour() {
        let registry = SettingsRegistry::standard();
        let err = registry.parse("max_login_attempt", "3").unwrap_err();
        match err {
            ConfigError::UnknownSetting { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("max_login_attempts"));
            }
            other => panic!("expected UnknownSetting, got {other:?}"),
        }
    }

    #[test]
    fn setting_value_json_matches_type() {
        assert_eq!(SettingValue::Integer(3).to_json(), json!(3));
        assert_eq!(SettingValue::Boolean(true).to_json(), json!(true));
        assert_eq!(SettingValue::Text("x".into()).to_json(), json!("x"));
        assert_eq!(SettingValue::Number(2.5).to_json(), json!(2.5));
    }
}
