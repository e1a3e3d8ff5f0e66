// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response envelope normalization.
//!
//! The API is inconsistent about wrapping: list endpoints answer with a bare
//! array, with `{ "data": [...] }`, or occasionally with an unrelated object.
//! Everything downstream works on plain vectors, so normalization happens here
//! once and never fails.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::lenient::number_or_zero;
use crate::types::Page;

/// Normalize a list payload to a vector.
///
/// Accepts `[...]` or `{ "data": [...] }`. Absent, `null`, and any other
/// shape yield an empty vector. Elements that fail to decode are dropped.
pub fn normalize_list<T: DeserializeOwned>(payload: Option<&Value>) -> Vec<T> {
    let items = match payload {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(Value::Object(map)) => match map.get("data") {
            Some(Value::Array(items)) => items,
            _ => {
                warn!("list payload is an object without a `data` array, treating as empty");
                return Vec::new();
            }
        },
        Some(other) => {
            warn!(kind = value_kind(other), "list payload is not an array, treating as empty");
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed list element");
                None
            }
        })
        .collect()
}

/// Strip a `{ "data": ... }` wrapper from a single-object payload.
pub fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.get("data").is_some_and(|v| !v.is_null()) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Decode a paginated listing.
///
/// Pagination metadata is read from a `pagination` object when present,
/// otherwise from top-level `page`/`limit`/`total`/`pages` fields. Missing
/// metadata is filled in from the item count.
pub fn parse_page<T: DeserializeOwned>(payload: &Value) -> Page<T> {
    let items: Vec<T> = normalize_list(Some(payload));
    let meta = payload
        .get("pagination")
        .filter(|m| m.is_object())
        .unwrap_or(payload);

    let field = |name: &str| meta.get(name).map(number_or_zero).unwrap_or(0.0);
    let page = field("page").max(1.0) as u32;
    let limit = match field("limit") as u32 {
        0 => items.len() as u32,
        n => n,
    };
    let total = match field("total") as u64 {
        0 => items.len() as u64,
        n => n,
    };
    let pages = match field("pages") as u32 {
        0 if limit > 0 => total.div_ceil(u64::from(limit)) as u32,
        n => n,
    };

    Page {
        items,
        page,
        limit,
        total,
        pages,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
