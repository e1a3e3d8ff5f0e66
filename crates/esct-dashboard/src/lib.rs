// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Member dashboard aggregation.
//!
//! [`DashboardLoader`] fetches the dashboard's inputs from any
//! [`DashboardSource`](esct_core::DashboardSource) in parallel, tolerating
//! per-request failure, and derives:
//!
//! - the year/month donation grid ([`calendar`]),
//! - per-category claim totals and distinct beneficiary counts ([`claims`]),
//! - the member's completed contribution total ([`contributions`]).
//!
//! The derivations are pure functions and can be used on their own.

pub mod calendar;
pub mod claims;
pub mod contributions;
pub mod loader;
pub mod settle;

pub use calendar::DonationCalendar;
pub use claims::{
    count_distinct_beneficiaries_by_type, sum_requested_by_type, BeneficiaryCounts, ClaimTotals,
};
pub use contributions::{total_completed, total_completed_from_payload};
pub use loader::{DashboardLoader, DashboardSnapshot};
pub use settle::{settle_all, Settle, Settled, SliceFailure};
