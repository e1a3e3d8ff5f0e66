// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Donation queue, payment orders, and donation history.

use esct_core::types::{Donation, DonationQueueItem, PaymentOrder};
use esct_core::EsctError;
use serde_json::{json, Value};
use tracing::info;

use crate::client::{decode, require_id, unwrap_named, ApiClient};
use crate::requests::{CreateOrder, Validate};

impl ApiClient {
    /// `GET /donations/queue`
    pub async fn donation_queue(&self) -> Result<Vec<DonationQueueItem>, EsctError> {
        self.fetch_list(&["donations", "queue"], &[]).await
    }

    /// `POST /donations/add-to-queue`
    pub async fn add_to_queue(&self, claim_id: &str) -> Result<(), EsctError> {
        let claim_id = require_id("claim", claim_id)?;
        self.post_value(&["donations", "add-to-queue"], &json!({ "claimId": claim_id }))
            .await?;
        info!(claim_id, "claim queued for donation");
        Ok(())
    }

    /// `DELETE /donations/queue/:claimId`
    pub async fn remove_from_queue(&self, claim_id: &str) -> Result<(), EsctError> {
        let claim_id = require_id("claim", claim_id)?;
        self.delete_value(&["donations", "queue", claim_id]).await?;
        info!(claim_id, "claim removed from donation queue");
        Ok(())
    }

    /// `POST /donations/create-order`
    pub async fn create_order(&self, order: &CreateOrder) -> Result<PaymentOrder, EsctError> {
        order.validate()?;
        let value = self
            .post_value(&["donations", "create-order"], order)
            .await?;
        decode(unwrap_named(value, "order"))
    }

    /// `GET /donations/my-donations`, undecoded.
    pub async fn my_donations_payload(&self) -> Result<Value, EsctError> {
        self.get_value(&["donations", "my-donations"], &[]).await
    }

    /// `GET /donations/my-donations`
    pub async fn my_donations(&self) -> Result<Vec<Donation>, EsctError> {
        self.fetch_list(&["donations", "my-donations"], &[]).await
    }
}
