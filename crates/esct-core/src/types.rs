// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types as served by the ESCT API.
//!
//! Every entity is owned by the server. Fields default when absent so that
//! partially populated documents still decode.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::funding;
use crate::lenient;

/// Anything carrying a server-assigned identifier.
pub trait Identified {
    fn id(&self) -> Option<&str>;
}

/// A document reference that may or may not have been populated by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    /// Bare identifier string.
    Id(String),
    /// Fully populated document.
    Populated(Box<T>),
}

impl<T: Identified> Reference<T> {
    /// Identifier of the referenced document, whichever form it arrived in.
    pub fn id(&self) -> Option<&str> {
        match self {
            Reference::Id(id) => Some(id.as_str()).filter(|s| !s.is_empty()),
            Reference::Populated(doc) => doc.id(),
        }
    }
}

impl<T> Reference<T> {
    /// The populated document, if the server expanded it.
    pub fn populated(&self) -> Option<&T> {
        match self {
            Reference::Populated(doc) => Some(doc),
            Reference::Id(_) => None,
        }
    }
}

/// Claim category.
///
/// The five named categories are the closed set the dashboard aggregates
/// over. Any other label is kept verbatim in [`ClaimType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimType {
    DeathDuringService,
    DeathAfterService,
    RetirementFarewell,
    DaughtersMarriage,
    MedicalClaim,
    Other(String),
}

impl ClaimType {
    /// The aggregated categories, in dashboard display order.
    pub const CATEGORIES: [ClaimType; 5] = [
        ClaimType::RetirementFarewell,
        ClaimType::DeathAfterService,
        ClaimType::DeathDuringService,
        ClaimType::MedicalClaim,
        ClaimType::DaughtersMarriage,
    ];

    /// Human label used on the wire.
    pub fn label(&self) -> &str {
        match self {
            ClaimType::DeathDuringService => "Death During Service",
            ClaimType::DeathAfterService => "Death After Service",
            ClaimType::RetirementFarewell => "Retirement Farewell",
            ClaimType::DaughtersMarriage => "Daughters Marriage",
            ClaimType::MedicalClaim => "Medical Claim",
            ClaimType::Other(label) => label,
        }
    }

    /// Whether this is one of the five named categories.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ClaimType::Other(_))
    }

    /// Parse a label. Accepts the wire label or the PascalCase identifier.
    pub fn parse(label: &str) -> Self {
        let compact: String = label
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "deathduringservice" => ClaimType::DeathDuringService,
            "deathafterservice" => ClaimType::DeathAfterService,
            "retirementfarewell" => ClaimType::RetirementFarewell,
            "daughtersmarriage" => ClaimType::DaughtersMarriage,
            "medicalclaim" => ClaimType::MedicalClaim,
            _ => ClaimType::Other(label.to_string()),
        }
    }
}

impl Default for ClaimType {
    fn default() -> Self {
        ClaimType::Other(String::new())
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClaimType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClaimType::parse(s))
    }
}

impl From<String> for ClaimType {
    fn from(label: String) -> Self {
        ClaimType::parse(&label)
    }
}

impl From<ClaimType> for String {
    fn from(claim_type: ClaimType) -> Self {
        claim_type.label().to_string()
    }
}

/// Claim verification lifecycle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum ClaimStatus {
    #[serde(rename = "Pending Verification", alias = "PendingVerification")]
    #[strum(to_string = "Pending Verification", serialize = "PendingVerification")]
    PendingVerification,
    Approved,
    Rejected,
    #[serde(rename = "Fully Funded", alias = "FullyFunded")]
    #[strum(to_string = "Fully Funded", serialize = "FullyFunded")]
    FullyFunded,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Beneficiary's personal details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Bank account that receives a claim's funds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub account_number: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ifsc_code: String,
}

/// The person a claim's funds are intended for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beneficiary {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub personal_details: PersonalDetails,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub bank_details: BankDetails,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub ehrms_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub pensioner_number: Option<String>,
}

impl Beneficiary {
    /// Identity used for distinct counting: `_id`, falling back to the EHRMS code.
    pub fn key(&self) -> Option<&str> {
        non_empty(self.id.as_deref()).or_else(|| non_empty(self.ehrms_code.as_deref()))
    }
}

impl Identified for Beneficiary {
    fn id(&self) -> Option<&str> {
        self.key()
    }
}

/// A platform member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub personal_details: PersonalDetails,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub ehrms_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_admin: bool,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub credit_score: Option<f64>,
}

impl User {
    /// Name to show for this member, falling back to their registry codes.
    pub fn display_name(&self) -> &str {
        non_empty(Some(self.personal_details.full_name.as_str()))
            .or_else(|| non_empty(self.ehrms_code.as_deref()))
            .or_else(|| non_empty(self.user_id.as_deref()))
            .unwrap_or("unknown member")
    }
}

impl Identified for User {
    fn id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }
}

/// A request for funds raised by or on behalf of a beneficiary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::or_default")]
    pub claim_type: ClaimType,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: ClaimStatus,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount_requested: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount_raised: f64,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Reference<Beneficiary>>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub raised_by: Option<Reference<User>>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Claim {
    /// Distinct-beneficiary key, if the claim carries one.
    pub fn beneficiary_key(&self) -> Option<&str> {
        self.beneficiary.as_ref().and_then(Reference::id)
    }

    /// Funding progress in whole percent.
    pub fn percent_funded(&self) -> u8 {
        funding::percent_funded(self.amount_raised, self.amount_requested)
    }

    /// Human-facing reference: the `claimId` if set, else the document id.
    pub fn reference(&self) -> &str {
        non_empty(self.claim_id.as_deref())
            .or_else(|| non_empty(self.id.as_deref()))
            .unwrap_or("-")
    }
}

impl Identified for Claim {
    fn id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }
}

/// Payment state of a donation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    Refunded,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single donation toward a claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    #[serde(rename = "_id", alias = "id", default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: DonationStatus,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<Reference<Claim>>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub donor_id: Option<Reference<User>>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub beneficiary_id: Option<Reference<Beneficiary>>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp", skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Donation {
    pub fn is_completed(&self) -> bool {
        self.status == DonationStatus::Completed
    }
}

impl Identified for Donation {
    fn id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }
}

/// A pending intent to donate toward a claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationQueueItem {
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub claim_id: Option<Reference<Claim>>,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub donation_id: Option<Reference<Donation>>,
}

impl DonationQueueItem {
    /// Id of the queued claim; the key `DELETE /donations/queue/:claimId` expects.
    pub fn claim_key(&self) -> Option<&str> {
        self.claim_id.as_ref().and_then(Reference::id)
    }
}

/// Monthly donation compliance state.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarStatus {
    Completed,
    Partial,
    #[default]
    #[serde(other)]
    Pending,
}

/// One member's donation record for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// `YYYY-MM`, 1-indexed month.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub month_year: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: CalendarStatus,
    #[serde(default, deserialize_with = "lenient::count")]
    pub donations_completed: u32,
}

impl CalendarEvent {
    /// `(year, month)` with a 1-indexed month, or `None` if `monthYear` is malformed.
    pub fn year_month(&self) -> Option<(i32, u32)> {
        parse_month_year(&self.month_year)
    }
}

/// Strictly parse `YYYY-MM`: four-digit year, two-digit month in `01..=12`.
pub fn parse_month_year(s: &str) -> Option<(i32, u32)> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// A platform-wide tunable as stored by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigEntry {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub value: serde_json::Value,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payment order returned by `POST /donations/create-order`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    #[serde(alias = "id", default, deserialize_with = "lenient::or_default")]
    pub order_id: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub donation_id: Option<String>,
}

fn default_currency() -> String {
    "INR".to_string()
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn claim_type_accepts_labels_and_identifiers() {
        assert_eq!(ClaimType::parse("Medical Claim"), ClaimType::MedicalClaim);
        assert_eq!(ClaimType::parse("MedicalClaim"), ClaimType::MedicalClaim);
        assert_eq!(
            ClaimType::parse("Daughter's Marriage"),
            ClaimType::DaughtersMarriage
        );
        assert_eq!(
            ClaimType::parse("Flood Relief"),
            ClaimType::Other("Flood Relief".into())
        );
        assert!(!ClaimType::parse("Flood Relief").is_recognized());
    }

    #[test]
    fn claim_type_serializes_as_label() {
        let json = serde_json::to_string(&ClaimType::RetirementFarewell).unwrap();
        assert_eq!(json, "\"Retirement Farewell\"");
        let other: ClaimType = serde_json::from_str("\"Flood Relief\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"Flood Relief\"");
    }

    #[test]
    fn claim_decodes_partial_document() {
        let claim: Claim =
            serde_json::from_value(json!({"type": "Medical Claim", "amountRequested": 5000}))
                .unwrap();
        assert_eq!(claim.claim_type, ClaimType::MedicalClaim);
        assert_eq!(claim.amount_requested, 5000.0);
        assert_eq!(claim.amount_raised, 0.0);
        assert_eq!(claim.status, ClaimStatus::Unknown);
        assert!(claim.beneficiary_key().is_none());
    }

    #[test]
    fn claim_status_accepts_both_spellings() {
        let a: ClaimStatus = serde_json::from_str("\"Pending Verification\"").unwrap();
        let b: ClaimStatus = serde_json::from_str("\"PendingVerification\"").unwrap();
        let c: ClaimStatus = serde_json::from_str("\"Archived\"").unwrap();
        assert_eq!(a, ClaimStatus::PendingVerification);
        assert_eq!(b, ClaimStatus::PendingVerification);
        assert_eq!(c, ClaimStatus::Unknown);
        assert_eq!("Approved".parse::<ClaimStatus>().unwrap(), ClaimStatus::Approved);
    }

    #[test]
    fn beneficiary_reference_as_id_or_document() {
        let by_id: Claim = serde_json::from_value(json!({"beneficiary": "b-1"})).unwrap();
        assert_eq!(by_id.beneficiary_key(), Some("b-1"));

        let populated: Claim = serde_json::from_value(json!({
            "beneficiary": {"_id": "b-2", "personalDetails": {"fullName": "R. Sharma"}}
        }))
        .unwrap();
        assert_eq!(populated.beneficiary_key(), Some("b-2"));
        assert_eq!(
            populated
                .beneficiary
                .as_ref()
                .and_then(Reference::populated)
                .map(|b| b.personal_details.full_name.as_str()),
            Some("R. Sharma")
        );

        let by_ehrms: Claim =
            serde_json::from_value(json!({"beneficiary": {"ehrmsCode": "E-77"}})).unwrap();
        assert_eq!(by_ehrms.beneficiary_key(), Some("E-77"));

        let anonymous: Claim =
            serde_json::from_value(json!({"beneficiary": {"personalDetails": {}}})).unwrap();
        assert_eq!(anonymous.beneficiary_key(), None);
    }

    #[test]
    fn donation_status_is_screaming_case() {
        let d: Donation =
            serde_json::from_value(json!({"amount": 200, "status": "COMPLETED"})).unwrap();
        assert!(d.is_completed());
        let d: Donation =
            serde_json::from_value(json!({"amount": 200, "status": "ON_HOLD"})).unwrap();
        assert_eq!(d.status, DonationStatus::Unknown);
        assert_eq!(DonationStatus::Refunded.to_string(), "REFUNDED");
    }

    #[test]
    fn queue_item_claim_key() {
        let item: DonationQueueItem = serde_json::from_value(json!({
            "claimId": {"_id": "c-9", "title": "Medical aid"},
            "donationId": "d-1"
        }))
        .unwrap();
        assert_eq!(item.claim_key(), Some("c-9"));
    }

    #[test]
    fn user_display_name_falls_back() {
        let named = User {
            personal_details: PersonalDetails {
                full_name: "Asha".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Asha");

        let coded = User {
            ehrms_code: Some("E-12".into()),
            ..Default::default()
        };
        assert_eq!(coded.display_name(), "E-12");
        assert_eq!(User::default().display_name(), "unknown member");
    }

    #[test]
    fn month_year_parsing_is_strict() {
        assert_eq!(parse_month_year("2024-01"), Some((2024, 1)));
        assert_eq!(parse_month_year("1999-12"), Some((1999, 12)));
        for bad in ["2024-13", "2024-00", "2024-1", "24-01", "2024/01", "abcd-ef", "", "2024-01-05", "+202-01"] {
            assert_eq!(parse_month_year(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn payment_order_accepts_id_alias() {
        let order: PaymentOrder =
            serde_json::from_value(json!({"id": "order_1", "amount": 500})).unwrap();
        assert_eq!(order.order_id, "order_1");
        assert_eq!(order.currency, "INR");
    }

    #[test]
    fn claim_with_null_fields_still_decodes() {
        let claim: Claim = serde_json::from_value(json!({
            "_id": "c-1",
            "type": null,
            "title": null,
            "description": null,
            "status": null,
            "amountRequested": 1200,
            "beneficiary": {"_id": "b-1", "personalDetails": {"fullName": null}},
            "raisedBy": null
        }))
        .unwrap();
        assert_eq!(claim.claim_type, ClaimType::default());
        assert!(!claim.claim_type.is_recognized());
        assert_eq!(claim.title, "");
        assert_eq!(claim.status, ClaimStatus::Unknown);
        assert_eq!(claim.amount_requested, 1200.0);
        assert_eq!(claim.beneficiary_key(), Some("b-1"));
        assert!(claim.raised_by.is_none());
    }

    #[test]
    fn claim_with_wrong_field_types_still_decodes() {
        let claim: Claim = serde_json::from_value(json!({
            "type": 7,
            "title": ["not", "a", "string"],
            "status": {"state": "open"},
            "amountRequested": "300",
            "beneficiary": 99
        }))
        .unwrap();
        assert!(!claim.claim_type.is_recognized());
        assert_eq!(claim.title, "");
        assert_eq!(claim.status, ClaimStatus::Unknown);
        assert_eq!(claim.amount_requested, 300.0);
        assert!(claim.beneficiary_key().is_none());
    }

    #[test]
    fn donation_event_and_user_tolerate_nulls() {
        let d: Donation = serde_json::from_value(json!({
            "_id": null, "amount": null, "status": null, "claimId": null, "createdAt": null
        }))
        .unwrap();
        assert_eq!(d.amount, 0.0);
        assert_eq!(d.status, DonationStatus::Unknown);
        assert!(d.claim_id.is_none());

        let e: CalendarEvent = serde_json::from_value(json!({
            "monthYear": null, "status": null, "donationsCompleted": null
        }))
        .unwrap();
        assert_eq!(e.month_year, "");
        assert_eq!(e.status, CalendarStatus::Pending);
        assert_eq!(e.donations_completed, 0);
        assert!(e.year_month().is_none());

        let u: User = serde_json::from_value(json!({
            "personalDetails": null, "isActive": null, "isAdmin": "yes", "ehrmsCode": "E-3"
        }))
        .unwrap();
        assert_eq!(u.display_name(), "E-3");
        assert!(!u.is_active);
        assert!(!u.is_admin);

        let b: Beneficiary = serde_json::from_value(json!({
            "ehrmsCode": "E-9", "bankDetails": {"accountNumber": null, "ifscCode": 5}
        }))
        .unwrap();
        assert_eq!(b.key(), Some("E-9"));
        assert_eq!(b.bank_details.account_number, "");
    }
}
