// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Administrator endpoints under `/admin`.
//!
//! All calls go through [`AdminApi`], borrowed from a client with
//! [`ApiClient::admin`]. The server enforces the admin role; the client only
//! shapes requests and validates input.

use esct_config::ConfigError;
use esct_config::SettingValue;
use esct_core::EsctError;
use esct_core::admin::{
    AdminStats, AuditLog, DonationCap, GalleryItem, NewsItem, Receipt, Subscription, Testimonial,
};
use esct_core::types::{AppConfigEntry, Claim, ClaimStatus, Donation, DonationStatus, Page, User};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::info;

use crate::client::{ApiClient, decode, require_id, unwrap_named};
use crate::requests::{
    CapInput, GalleryInput, NewsInput, ReceiptDecision, Validate, VerifyClaim,
};

impl ApiClient {
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { client: self }
    }
}

/// Borrowed view of the client scoped to `/admin` routes.
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl AdminApi<'_> {
    async fn list<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(&str, String)],
    ) -> Result<Vec<T>, EsctError> {
        self.client.fetch_list(&admin_path(path), query).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        path: &[&str],
        body: &Value,
        name: &str,
    ) -> Result<T, EsctError> {
        let value = self.client.put_value(&admin_path(path), body).await?;
        decode(unwrap_named(value, name))
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &[&str],
        body: &Value,
        name: &str,
    ) -> Result<T, EsctError> {
        let value = self.client.post_value(&admin_path(path), body).await?;
        decode(unwrap_named(value, name))
    }

    async fn delete(&self, path: &[&str]) -> Result<(), EsctError> {
        self.client.delete_value(&admin_path(path)).await?;
        Ok(())
    }

    /// `GET /admin/dashboard`
    pub async fn stats(&self) -> Result<AdminStats, EsctError> {
        self.client.fetch_one(&["admin", "dashboard"], "stats").await
    }

    // Users

    pub async fn users(&self) -> Result<Vec<User>, EsctError> {
        self.list(&["users"], &[]).await
    }

    pub async fn user(&self, id: &str) -> Result<User, EsctError> {
        let id = require_id("user", id)?;
        self.client.fetch_one(&["admin", "users", id], "user").await
    }

    /// `PUT /admin/users/:id/status`
    pub async fn set_user_active(&self, id: &str, active: bool) -> Result<User, EsctError> {
        let id = require_id("user", id)?;
        let user = self
            .put(&["users", id, "status"], &json!({ "isActive": active }), "user")
            .await?;
        info!(user_id = id, active, "user status updated");
        Ok(user)
    }

    /// `PUT /admin/users/:id/verify`
    pub async fn verify_user(&self, id: &str) -> Result<User, EsctError> {
        let id = require_id("user", id)?;
        self.put(&["users", id, "verify"], &json!({}), "user").await
    }

    /// `PUT /admin/users/:id/credit-score`
    pub async fn set_credit_score(&self, id: &str, score: f64) -> Result<User, EsctError> {
        let id = require_id("user", id)?;
        if !score.is_finite() {
            return Err(EsctError::Validation(format!(
                "credit score must be a finite number, got {score}"
            )));
        }
        self.put(
            &["users", id, "credit-score"],
            &json!({ "creditScore": score }),
            "user",
        )
        .await
    }

    // Claims

    /// `GET /admin/claims`, optionally filtered by status.
    pub async fn claims(&self, status: Option<ClaimStatus>) -> Result<Vec<Claim>, EsctError> {
        let query: Vec<(&str, String)> = status
            .filter(|s| *s != ClaimStatus::Unknown)
            .map(|s| ("status", s.to_string()))
            .into_iter()
            .collect();
        self.list(&["claims"], &query).await
    }

    /// `PUT /admin/claims/:id/verify`
    pub async fn verify_claim(&self, id: &str, decision: &VerifyClaim) -> Result<Claim, EsctError> {
        let id = require_id("claim", id)?;
        decision.validate()?;
        let body = serde_json::to_value(decision).map_err(encode_error)?;
        let claim = self.put(&["claims", id, "verify"], &body, "claim").await?;
        info!(claim_id = id, status = %decision.status, "claim verified");
        Ok(claim)
    }

    /// `PUT /admin/claims/:id/close`
    pub async fn close_claim(&self, id: &str) -> Result<Claim, EsctError> {
        let id = require_id("claim", id)?;
        self.put(&["claims", id, "close"], &json!({}), "claim").await
    }

    // Donations

    pub async fn donations(
        &self,
        status: Option<DonationStatus>,
    ) -> Result<Vec<Donation>, EsctError> {
        let query: Vec<(&str, String)> = status
            .filter(|s| *s != DonationStatus::Unknown)
            .map(|s| ("status", s.to_string()))
            .into_iter()
            .collect();
        self.list(&["donations"], &query).await
    }

    /// `PUT /admin/donations/:id/status`
    pub async fn set_donation_status(
        &self,
        id: &str,
        status: DonationStatus,
    ) -> Result<Donation, EsctError> {
        let id = require_id("donation", id)?;
        if status == DonationStatus::Unknown {
            return Err(EsctError::Validation(
                "donation status must be one of PENDING, COMPLETED, FAILED, CANCELLED, REFUNDED"
                    .into(),
            ));
        }
        self.put(
            &["donations", id, "status"],
            &json!({ "status": status.to_string() }),
            "donation",
        )
        .await
    }

    // Receipts and subscriptions

    pub async fn receipts(&self) -> Result<Vec<Receipt>, EsctError> {
        self.list(&["receipts"], &[]).await
    }

    pub async fn verify_receipt(
        &self,
        id: &str,
        decision: ReceiptDecision,
    ) -> Result<Receipt, EsctError> {
        let id = require_id("receipt", id)?;
        self.put(
            &["receipts", id, "verify"],
            &json!({ "status": decision }),
            "receipt",
        )
        .await
    }

    pub async fn subscriptions(&self) -> Result<Vec<Subscription>, EsctError> {
        self.list(&["subscriptions"], &[]).await
    }

    pub async fn update_subscription(
        &self,
        id: &str,
        status: &str,
    ) -> Result<Subscription, EsctError> {
        let id = require_id("subscription", id)?;
        let status = status.trim();
        if status.is_empty() {
            return Err(EsctError::Validation(
                "subscription status must not be empty".into(),
            ));
        }
        self.put(
            &["subscriptions", id],
            &json!({ "status": status }),
            "subscription",
        )
        .await
    }

    // Donation caps

    pub async fn caps(&self) -> Result<Vec<DonationCap>, EsctError> {
        self.list(&["caps"], &[]).await
    }

    pub async fn create_cap(&self, cap: &CapInput) -> Result<DonationCap, EsctError> {
        cap.validate()?;
        let body = serde_json::to_value(cap).map_err(encode_error)?;
        self.post(&["caps"], &body, "cap").await
    }

    pub async fn update_cap(&self, id: &str, cap: &CapInput) -> Result<DonationCap, EsctError> {
        let id = require_id("cap", id)?;
        cap.validate()?;
        let body = serde_json::to_value(cap).map_err(encode_error)?;
        self.put(&["caps", id], &body, "cap").await
    }

    pub async fn delete_cap(&self, id: &str) -> Result<(), EsctError> {
        let id = require_id("cap", id)?;
        self.delete(&["caps", id]).await
    }

    // Platform settings

    /// `GET /admin/config`
    pub async fn config(&self) -> Result<Vec<AppConfigEntry>, EsctError> {
        self.list(&["config"], &[]).await
    }

    /// `PUT /admin/config/:key` with a value checked against the settings registry.
    ///
    /// Unknown keys and out-of-schema values are rejected without a request.
    pub async fn update_config(&self, key: &str, value: &Value) -> Result<SettingValue, EsctError> {
        let checked = self
            .client
            .settings()
            .validate(key, value)
            .map_err(setting_error)?;
        self.client
            .put_value(&["admin", "config", key], &json!({ "value": checked.to_json() }))
            .await?;
        info!(key, value = %checked, "platform setting updated");
        Ok(checked)
    }

    /// Like [`update_config`](Self::update_config) for a raw command-line value.
    pub async fn update_config_str(&self, key: &str, raw: &str) -> Result<SettingValue, EsctError> {
        self.update_config(key, &Value::String(raw.to_string())).await
    }

    /// `GET /admin/logs?page=&limit=`
    pub async fn logs(&self, page: u32, limit: u32) -> Result<Page<AuditLog>, EsctError> {
        let query = [("page", page.max(1).to_string()), ("limit", limit.max(1).to_string())];
        self.client.fetch_page(&["admin", "logs"], &query).await
    }

    // Content curation

    pub async fn gallery(&self) -> Result<Vec<GalleryItem>, EsctError> {
        self.list(&["gallery"], &[]).await
    }

    pub async fn create_gallery_item(&self, item: &GalleryInput) -> Result<GalleryItem, EsctError> {
        item.validate()?;
        let body = serde_json::to_value(item).map_err(encode_error)?;
        self.post(&["gallery"], &body, "item").await
    }

    pub async fn update_gallery_item(
        &self,
        id: &str,
        item: &GalleryInput,
    ) -> Result<GalleryItem, EsctError> {
        let id = require_id("gallery item", id)?;
        item.validate()?;
        let body = serde_json::to_value(item).map_err(encode_error)?;
        self.put(&["gallery", id], &body, "item").await
    }

    pub async fn delete_gallery_item(&self, id: &str) -> Result<(), EsctError> {
        let id = require_id("gallery item", id)?;
        self.delete(&["gallery", id]).await
    }

    pub async fn news(&self) -> Result<Vec<NewsItem>, EsctError> {
        self.list(&["news"], &[]).await
    }

    pub async fn create_news(&self, item: &NewsInput) -> Result<NewsItem, EsctError> {
        item.validate()?;
        let body = serde_json::to_value(item).map_err(encode_error)?;
        self.post(&["news"], &body, "news").await
    }

    pub async fn update_news(&self, id: &str, item: &NewsInput) -> Result<NewsItem, EsctError> {
        let id = require_id("news", id)?;
        item.validate()?;
        let body = serde_json::to_value(item).map_err(encode_error)?;
        self.put(&["news", id], &body, "news").await
    }

    pub async fn delete_news(&self, id: &str) -> Result<(), EsctError> {
        let id = require_id("news", id)?;
        self.delete(&["news", id]).await
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, EsctError> {
        self.list(&["testimonials"], &[]).await
    }

    pub async fn approve_testimonial(&self, id: &str) -> Result<Testimonial, EsctError> {
        let id = require_id("testimonial", id)?;
        self.put(&["testimonials", id, "approve"], &json!({}), "testimonial")
            .await
    }

    pub async fn delete_testimonial(&self, id: &str) -> Result<(), EsctError> {
        let id = require_id("testimonial", id)?;
        self.delete(&["testimonials", id]).await
    }
}

fn admin_path<'a>(path: &[&'a str]) -> Vec<&'a str> {
    std::iter::once("admin").chain(path.iter().copied()).collect()
}

fn encode_error(e: serde_json::Error) -> EsctError {
    EsctError::Internal(format!("failed to encode request body: {e}"))
}

/// Flatten a registry rejection, keeping its hint.
fn setting_error(e: ConfigError) -> EsctError {
    let hint = match &e {
        ConfigError::UnknownSetting {
            suggestion: Some(s),
            ..
        } => format!(" (did you mean `{s}`?)"),
        ConfigError::InvalidSetting { expected, .. } => format!(" (expected {expected})"),
        _ => String::new(),
    };
    EsctError::Validation(format!("{e}{hint}"))
}
