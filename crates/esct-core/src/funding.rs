// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Funding progress for a claim.

/// Percentage of the goal raised, rounded and clamped to `0..=100`.
///
/// A goal of zero or less has no meaningful progress and reports `0`.
pub fn percent_funded(raised: f64, goal: f64) -> u8 {
    if goal.is_nan() || goal <= 0.0 {
        return 0;
    }
    let ratio = raised / goal * 100.0;
    if !ratio.is_finite() {
        return 0;
    }
    ratio.round().clamp(0.0, 100.0) as u8
}
