// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contribution Totalizer.

use esct_core::Donation;
use esct_core::envelope::normalize_list;
use serde_json::Value;

/// Sum of `amount` over completed donations.
pub fn total_completed(donations: &[Donation]) -> f64 {
    donations
        .iter()
        .filter(|d| d.is_completed())
        .fold(0.0, |acc, d| acc + d.amount)
}

/// [`total_completed`] over a raw `my-donations` payload.
///
/// Accepts `[...]` or `{ "data": [...] }`; anything else totals 0.
pub fn total_completed_from_payload(payload: Option<&Value>) -> f64 {
    total_completed(&normalize_list::<Donation>(payload))
}
