// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Administrative and content entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::types::{non_empty, ClaimType, Donation, Identified, Reference, User};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_users: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub active_users: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_claims: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub pending_claims: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub approved_claims: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_donations: u32,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_amount_raised: f64,
}

/// Payment receipt uploaded against a donation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub donation: Option<Reference<Donation>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub receipt_url: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Member subscription to the fund.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub user: Option<Reference<User>>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub plan: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Monthly ceiling on donations accepted for one claim type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationCap {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub claim_type: ClaimType,
    /// `YYYY-MM` the cap applies to.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub month_year: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub cap_amount: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_active: bool,
}

/// Read-only audit trail entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub action: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub actor: Option<Reference<User>>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub details: serde_json::Value,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_published: bool,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_approved: bool,
}

macro_rules! identified_by_id {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> Option<&str> {
                non_empty(self.id.as_deref())
            }
        })*
    };
}

identified_by_id!(Receipt, Subscription, DonationCap, AuditLog, GalleryItem, NewsItem, Testimonial);
