// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-side data source for the member dashboard.

use async_trait::async_trait;

use crate::admin::{GalleryItem, NewsItem, Testimonial};
use crate::error::EsctError;
use crate::types::{CalendarEvent, Claim, DonationQueueItem, User};

/// The independent reads the dashboard fans out over.
///
/// Each method maps to one API call. Implementations must not retry; the
/// dashboard decides what a failure means for its slice.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// `GET /auth/me`
    async fn current_user(&self) -> Result<User, EsctError>;

    /// `GET /claims`
    async fn claims(&self) -> Result<Vec<Claim>, EsctError>;

    /// `GET /donations/queue`
    async fn donation_queue(&self) -> Result<Vec<DonationQueueItem>, EsctError>;

    /// `GET /users/calendar`
    async fn calendar(&self) -> Result<Vec<CalendarEvent>, EsctError>;

    /// `GET /donations/my-donations`, undecoded.
    ///
    /// The payload shape varies (bare array, `data` envelope, or an
    /// unrelated object); the totalizer normalizes it.
    async fn my_donations_payload(&self) -> Result<serde_json::Value, EsctError>;

    /// `GET /gallery`
    async fn gallery(&self) -> Result<Vec<GalleryItem>, EsctError>;

    /// `GET /news`
    async fn news(&self) -> Result<Vec<NewsItem>, EsctError>;

    /// `GET /testimonials`
    async fn testimonials(&self) -> Result<Vec<Testimonial>, EsctError>;
}
