// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the ESCT client toolkit.
//!
//! This crate provides the error type, the domain types served by the ESCT
//! welfare-fund API, response normalization helpers, and the trait seams
//! (`AuthTokenStore`, `DashboardSource`) the client and dashboard crates
//! meet at.

pub mod admin;
pub mod envelope;
pub mod error;
pub mod funding;
pub mod lenient;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::EsctError;
pub use traits::{AuthTokenStore, DashboardSource};
pub use types::{
    Beneficiary, CalendarEvent, CalendarStatus, Claim, ClaimStatus, ClaimType, Donation,
    DonationQueueItem, DonationStatus, Reference, User,
};
