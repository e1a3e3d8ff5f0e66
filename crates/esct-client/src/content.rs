// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Public content feeds.

use esct_core::admin::{GalleryItem, NewsItem, Testimonial};
use esct_core::EsctError;

use crate::client::ApiClient;

impl ApiClient {
    pub async fn gallery(&self) -> Result<Vec<GalleryItem>, EsctError> {
        self.fetch_list(&["gallery"], &[]).await
    }

    pub async fn news(&self) -> Result<Vec<NewsItem>, EsctError> {
        self.fetch_list(&["news"], &[]).await
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, EsctError> {
        self.fetch_list(&["testimonials"], &[]).await
    }
}
