// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Forgiving field deserializers for server payloads.
//!
//! The API is loosely typed: amounts occasionally arrive as strings, counts
//! go missing, and timestamps are not always RFC 3339. These helpers coerce
//! such values to a usable default instead of failing the whole record.
//!
//! `#[serde(default)]` alone only covers an absent key; an explicit `null`
//! still fails the enclosing document, so fields pair it with one of these.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to a finite number. Anything else reads as `0.0`.
pub fn number_or_zero(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).unwrap_or(0.0)
}

/// Monetary amount; missing, null, or non-numeric reads as `0.0`.
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(number_or_zero).unwrap_or(0.0))
}

/// Any field; `null` or a value of the wrong shape reads as `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default())
}

/// Non-negative counter; fractions truncate, negatives and junk read as `0`.
///
/// Clamping happens at decode time, so totals are sums of the clamped values.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let n = value.as_ref().map(number_or_zero).unwrap_or(0.0);
    Ok(n.clamp(0.0, f64::from(u32::MAX)) as u32)
}

/// Optional number; present-but-garbage reads as `None`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }))
}

/// Optional RFC 3339 timestamp; unparsable strings read as `None`.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    })
}
