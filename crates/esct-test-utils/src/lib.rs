// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the ESCT crates.
//!
//! - [`fixtures`]: terse constructors for claims, donations, calendar events
//!   and users.
//! - [`MockSource`]: a [`DashboardSource`](esct_core::DashboardSource) with
//!   scripted data and per-slice failures, recording every call.

pub mod fixtures;
pub mod mock_source;

pub use mock_source::MockSource;
