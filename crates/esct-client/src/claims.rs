// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Claim browsing and submission.

use esct_core::types::{Claim, ClaimType, Page};
use esct_core::EsctError;

use crate::client::{decode, require_id, unwrap_named, ApiClient};
use crate::requests::{NewClaim, Validate};

impl ApiClient {
    /// `GET /claims`
    pub async fn claims(&self) -> Result<Vec<Claim>, EsctError> {
        self.fetch_list(&["claims"], &[]).await
    }

    /// `GET /claims/:id`
    pub async fn claim(&self, id: &str) -> Result<Claim, EsctError> {
        let id = require_id("claim", id)?;
        self.fetch_one(&["claims", id], "claim").await
    }

    /// `GET /claims/my-claims`
    pub async fn my_claims(&self) -> Result<Vec<Claim>, EsctError> {
        self.fetch_list(&["claims", "my-claims"], &[]).await
    }

    /// `GET /claims/random`, a shuffled selection for the landing page.
    pub async fn random_claims(&self) -> Result<Vec<Claim>, EsctError> {
        self.fetch_list(&["claims", "random"], &[]).await
    }

    /// `GET /claims/:type?page=&limit=`
    pub async fn claims_by_type(
        &self,
        claim_type: &ClaimType,
        page: u32,
        limit: u32,
    ) -> Result<Page<Claim>, EsctError> {
        let query = [("page", page.max(1).to_string()), ("limit", limit.max(1).to_string())];
        self.fetch_page(&["claims", claim_type.label()], &query).await
    }

    /// `POST /claims`
    pub async fn create_claim(&self, claim: &NewClaim) -> Result<Claim, EsctError> {
        claim.validate()?;
        let value = self.post_value(&["claims"], claim).await?;
        decode(unwrap_named(value, "claim"))
    }
}
