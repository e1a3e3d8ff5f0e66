// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote Data Fetcher: loads everything the member dashboard shows.

use esct_core::admin::{GalleryItem, NewsItem, Testimonial};
use esct_core::{Claim, DashboardSource, DonationQueueItem, User};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::calendar::DonationCalendar;
use crate::claims::{BeneficiaryCounts, ClaimTotals};
use crate::contributions::total_completed_from_payload;
use crate::settle::{Settle, SliceFailure};

/// Everything the dashboard renders, derived from one round of requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// `None` when `/auth/me` failed.
    pub user: Option<User>,
    pub claims: Vec<Claim>,
    pub queue: Vec<DonationQueueItem>,
    pub calendar: DonationCalendar,
    pub claim_totals: ClaimTotals,
    pub beneficiaries: BeneficiaryCounts,
    /// Sum of the member's completed donations.
    pub total_contributed: f64,
    pub gallery: Vec<GalleryItem>,
    pub news: Vec<NewsItem>,
    pub testimonials: Vec<Testimonial>,
    /// Slices that fell back to their defaults.
    pub failures: Vec<SliceFailure>,
}

impl DashboardSnapshot {
    /// True when every request succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Drop queue entries for `claim_id` after the server confirmed the removal.
    ///
    /// Returns how many entries were removed.
    pub fn remove_queued(&mut self, claim_id: &str) -> usize {
        let before = self.queue.len();
        self.queue.retain(|item| item.claim_key() != Some(claim_id));
        before - self.queue.len()
    }
}

/// Fans out the dashboard requests and derives the aggregates.
#[derive(Debug, Clone, Copy)]
pub struct DashboardLoader {
    include_content: bool,
}

impl Default for DashboardLoader {
    fn default() -> Self {
        Self {
            include_content: true,
        }
    }
}

impl DashboardLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to also fetch gallery, news, and testimonials.
    pub fn include_content(mut self, include: bool) -> Self {
        self.include_content = include;
        self
    }

    /// Issue every request concurrently and build a snapshot.
    ///
    /// Never fails: each slice that errors is replaced by its default and
    /// listed in [`DashboardSnapshot::failures`].
    pub async fn load(&self, source: &dyn DashboardSource) -> DashboardSnapshot {
        let include_content = self.include_content;
        let content = async {
            if include_content {
                let (gallery, news, testimonials) =
                    futures::join!(source.gallery(), source.news(), source.testimonials());
                Some((gallery, news, testimonials))
            } else {
                None
            }
        };

        let (user, claims, queue, calendar, donations, content) = futures::join!(
            source.current_user(),
            source.claims(),
            source.donation_queue(),
            source.calendar(),
            source.my_donations_payload(),
            content,
        );

        let mut failures = Vec::new();
        let user = user.map(Some).or_fallback("user", None).record(&mut failures);
        let claims = claims.or_fallback("claims", Vec::new()).record(&mut failures);
        let queue = queue.or_fallback("queue", Vec::new()).record(&mut failures);
        let events = calendar
            .or_fallback("calendar", Vec::new())
            .record(&mut failures);
        let donations = donations
            .or_fallback("donations", Value::Null)
            .record(&mut failures);

        let (gallery, news, testimonials) = match content {
            Some((gallery, news, testimonials)) => (
                gallery.or_fallback("gallery", Vec::new()).record(&mut failures),
                news.or_fallback("news", Vec::new()).record(&mut failures),
                testimonials
                    .or_fallback("testimonials", Vec::new())
                    .record(&mut failures),
            ),
            None => {
                debug!("content feeds disabled");
                (Vec::new(), Vec::new(), Vec::new())
            }
        };

        let snapshot = DashboardSnapshot {
            calendar: DonationCalendar::build(&events),
            claim_totals: ClaimTotals::from_claims(&claims),
            beneficiaries: BeneficiaryCounts::from_claims(&claims),
            total_contributed: total_completed_from_payload(Some(&donations)),
            user,
            claims,
            queue,
            gallery,
            news,
            testimonials,
            failures,
        };

        info!(
            claims = snapshot.claims.len(),
            queued = snapshot.queue.len(),
            failed_slices = snapshot.failures.len(),
            "dashboard loaded"
        );
        snapshot
    }
}
