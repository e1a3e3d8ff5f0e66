// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scriptable dashboard data source.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use esct_core::admin::{GalleryItem, NewsItem, Testimonial};
use esct_core::types::{CalendarEvent, Claim, DonationQueueItem, User};
use esct_core::{DashboardSource, EsctError};
use serde_json::Value;

/// Slice names, matching the method that serves them.
pub const SLICES: [&str; 8] = [
    "current_user",
    "claims",
    "donation_queue",
    "calendar",
    "my_donations",
    "gallery",
    "news",
    "testimonials",
];

/// A [`DashboardSource`] serving fixed data.
///
/// Slices marked with [`MockSource::fail`] answer with an
/// [`EsctError::Api`] instead. Every call is appended to a log so tests can
/// assert which requests were made and that none were repeated.
#[derive(Clone, Default)]
pub struct MockSource {
    user: User,
    claims: Vec<Claim>,
    queue: Vec<DonationQueueItem>,
    calendar: Vec<CalendarEvent>,
    donations: Value,
    gallery: Vec<GalleryItem>,
    news: Vec<NewsItem>,
    testimonials: Vec<Testimonial>,
    failures: HashMap<&'static str, (u16, String)>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    pub fn with_claims(mut self, claims: Vec<Claim>) -> Self {
        self.claims = claims;
        self
    }

    pub fn with_queue(mut self, queue: Vec<DonationQueueItem>) -> Self {
        self.queue = queue;
        self
    }

    pub fn with_calendar(mut self, calendar: Vec<CalendarEvent>) -> Self {
        self.calendar = calendar;
        self
    }

    /// Raw `my-donations` payload, served as-is.
    pub fn with_donations_payload(mut self, payload: Value) -> Self {
        self.donations = payload;
        self
    }

    pub fn with_content(
        mut self,
        gallery: Vec<GalleryItem>,
        news: Vec<NewsItem>,
        testimonials: Vec<Testimonial>,
    ) -> Self {
        self.gallery = gallery;
        self.news = news;
        self.testimonials = testimonials;
        self
    }

    /// Make `slice` fail with `status` and `message`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is not one of [`SLICES`].
    pub fn fail(mut self, slice: &'static str, status: u16, message: &str) -> Self {
        assert!(SLICES.contains(&slice), "unknown slice `{slice}`");
        self.failures.insert(slice, (status, message.to_string()));
        self
    }

    /// Every call made so far, in order.
    pub async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    /// Number of calls made to `slice`.
    pub async fn call_count(&self, slice: &str) -> usize {
        self.calls.lock().await.iter().filter(|s| **s == slice).count()
    }

    async fn serve<T: Clone>(&self, slice: &'static str, data: &T) -> Result<T, EsctError> {
        self.calls.lock().await.push(slice);
        match self.failures.get(slice) {
            Some((status, message)) => Err(EsctError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(data.clone()),
        }
    }
}

#[async_trait]
impl DashboardSource for MockSource {
    async fn current_user(&self) -> Result<User, EsctError> {
        self.serve("current_user", &self.user).await
    }

    async fn claims(&self) -> Result<Vec<Claim>, EsctError> {
        self.serve("claims", &self.claims).await
    }

    async fn donation_queue(&self) -> Result<Vec<DonationQueueItem>, EsctError> {
        self.serve("donation_queue", &self.queue).await
    }

    async fn calendar(&self) -> Result<Vec<CalendarEvent>, EsctError> {
        self.serve("calendar", &self.calendar).await
    }

    async fn my_donations_payload(&self) -> Result<Value, EsctError> {
        self.serve("my_donations", &self.donations).await
    }

    async fn gallery(&self) -> Result<Vec<GalleryItem>, EsctError> {
        self.serve("gallery", &self.gallery).await
    }

    async fn news(&self) -> Result<Vec<NewsItem>, EsctError> {
        self.serve("news", &self.news).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, EsctError> {
        self.serve("testimonials", &self.testimonials).await
    }
}
