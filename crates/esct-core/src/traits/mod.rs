// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the API client and its consumers.

pub mod source;
pub mod token;

pub use source::DashboardSource;
pub use token::AuthTokenStore;
