// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`DashboardSource`] backed by the live API.

use async_trait::async_trait;
use esct_core::admin::{GalleryItem, NewsItem, Testimonial};
use esct_core::types::{CalendarEvent, Claim, DonationQueueItem, User};
use esct_core::{DashboardSource, EsctError};
use serde_json::Value;

use crate::client::ApiClient;

#[async_trait]
impl DashboardSource for ApiClient {
    async fn current_user(&self) -> Result<User, EsctError> {
        self.me().await
    }

    async fn claims(&self) -> Result<Vec<Claim>, EsctError> {
        ApiClient::claims(self).await
    }

    async fn donation_queue(&self) -> Result<Vec<DonationQueueItem>, EsctError> {
        ApiClient::donation_queue(self).await
    }

    async fn calendar(&self) -> Result<Vec<CalendarEvent>, EsctError> {
        ApiClient::calendar(self).await
    }

    async fn my_donations_payload(&self) -> Result<Value, EsctError> {
        ApiClient::my_donations_payload(self).await
    }

    async fn gallery(&self) -> Result<Vec<GalleryItem>, EsctError> {
        ApiClient::gallery(self).await
    }

    async fn news(&self) -> Result<Vec<NewsItem>, EsctError> {
        ApiClient::news(self).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, EsctError> {
        ApiClient::testimonials(self).await
    }
}
