// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request bodies for mutating endpoints.
//!
//! Each body is checked with [`Validate`] before it is sent, so obviously bad
//! input fails locally with [`EsctError::Validation`] instead of a round trip.

use esct_core::EsctError;
use esct_core::types::{ClaimType, parse_month_year};
use serde::Serialize;
use strum::{Display, EnumString};

/// Local checks run before a body is sent.
pub trait Validate {
    fn validate(&self) -> Result<(), EsctError>;
}

fn positive_amount(field: &str, amount: f64) -> Result<(), EsctError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(EsctError::Validation(format!(
            "{field} must be a positive amount, got {amount}"
        )))
    }
}

fn not_blank(field: &str, value: &str) -> Result<(), EsctError> {
    if value.trim().is_empty() {
        Err(EsctError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

fn recognized(claim_type: &ClaimType) -> Result<(), EsctError> {
    if claim_type.is_recognized() {
        Ok(())
    } else {
        let known: Vec<&str> = ClaimType::CATEGORIES.iter().map(ClaimType::label).collect();
        Err(EsctError::Validation(format!(
            "unknown claim type `{claim_type}`; expected one of: {}",
            known.join(", ")
        )))
    }
}

/// `POST /claims`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClaim {
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub title: String,
    pub description: String,
    pub amount_requested: f64,
    /// Id of an existing beneficiary record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<String>,
}

impl Validate for NewClaim {
    fn validate(&self) -> Result<(), EsctError> {
        recognized(&self.claim_type)?;
        not_blank("title", &self.title)?;
        positive_amount("amountRequested", self.amount_requested)
    }
}

/// `POST /donations/create-order`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub claim_id: String,
    pub amount: f64,
}

impl Validate for CreateOrder {
    fn validate(&self) -> Result<(), EsctError> {
        not_blank("claimId", &self.claim_id)?;
        positive_amount("amount", self.amount)
    }
}

/// Outcome an administrator can record when verifying a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum ClaimDecision {
    Approved,
    Rejected,
}

/// `PUT /admin/claims/:id/verify`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyClaim {
    pub status: ClaimDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_notes: Option<String>,
}

impl Validate for VerifyClaim {
    fn validate(&self) -> Result<(), EsctError> {
        if self.status == ClaimDecision::Rejected
            && self
                .verification_notes
                .as_deref()
                .is_none_or(|n| n.trim().is_empty())
        {
            return Err(EsctError::Validation(
                "rejecting a claim requires verification notes".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a receipt review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ReceiptDecision {
    Verified,
    Rejected,
}

/// `POST /admin/caps`, `PUT /admin/caps/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapInput {
    pub claim_type: ClaimType,
    pub month_year: String,
    pub cap_amount: f64,
    pub is_active: bool,
}

impl Validate for CapInput {
    fn validate(&self) -> Result<(), EsctError> {
        recognized(&self.claim_type)?;
        if parse_month_year(&self.month_year).is_none() {
            return Err(EsctError::Validation(format!(
                "monthYear `{}` must be YYYY-MM",
                self.month_year
            )));
        }
        positive_amount("capAmount", self.cap_amount)
    }
}

/// `POST /admin/gallery`, `PUT /admin/gallery/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryInput {
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Validate for GalleryInput {
    fn validate(&self) -> Result<(), EsctError> {
        not_blank("title", &self.title)?;
        not_blank("imageUrl", &self.image_url)
    }
}

/// `POST /admin/news`, `PUT /admin/news/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsInput {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_published: bool,
}

impl Validate for NewsInput {
    fn validate(&self) -> Result<(), EsctError> {
        not_blank("title", &self.title)?;
        not_blank("content", &self.content)
    }
}
