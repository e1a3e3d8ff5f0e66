// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST client for the ESCT welfare-fund API.
//!
//! [`ApiClient`] covers the member endpoints (claims, donation queue,
//! calendar, content) and, through [`ApiClient::admin`], the administrator
//! endpoints. It also implements [`esct_core::DashboardSource`] so the
//! dashboard loader can run against the live server.

pub mod admin;
pub mod auth;
pub mod claims;
pub mod client;
pub mod content;
pub mod donations;
pub mod requests;
pub mod source;
pub mod token;
pub mod users;

pub use admin::AdminApi;
pub use client::ApiClient;
pub use requests::{
    CapInput, ClaimDecision, CreateOrder, GalleryInput, NewClaim, NewsInput, ReceiptDecision,
    Validate, VerifyClaim,
};
pub use token::{FileTokenStore, MemoryTokenStore};
