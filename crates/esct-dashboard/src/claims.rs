// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Claims Aggregator: per-category totals over the claims list.

use std::collections::HashSet;

use esct_core::{Claim, ClaimType};
use serde::Serialize;

/// Sum of `amountRequested` over claims of `claim_type`.
pub fn sum_requested_by_type(claims: &[Claim], claim_type: &ClaimType) -> f64 {
    claims
        .iter()
        .filter(|c| &c.claim_type == claim_type)
        .fold(0.0, |acc, c| acc + c.amount_requested)
}

/// Number of distinct beneficiaries across claims of `claim_type`.
///
/// Claims whose beneficiary has no usable key are not counted.
pub fn count_distinct_beneficiaries_by_type(claims: &[Claim], claim_type: &ClaimType) -> usize {
    claims
        .iter()
        .filter(|c| &c.claim_type == claim_type)
        .filter_map(Claim::beneficiary_key)
        .collect::<HashSet<_>>()
        .len()
}

/// Requested amounts per category.
///
/// `total` covers every claim, including types outside the five categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTotals {
    pub retirement: f64,
    pub death_after: f64,
    pub death_during: f64,
    pub medical: f64,
    pub marriage: f64,
    pub total: f64,
}

impl ClaimTotals {
    pub fn from_claims(claims: &[Claim]) -> Self {
        Self {
            retirement: sum_requested_by_type(claims, &ClaimType::RetirementFarewell),
            death_after: sum_requested_by_type(claims, &ClaimType::DeathAfterService),
            death_during: sum_requested_by_type(claims, &ClaimType::DeathDuringService),
            medical: sum_requested_by_type(claims, &ClaimType::MedicalClaim),
            marriage: sum_requested_by_type(claims, &ClaimType::DaughtersMarriage),
            total: claims.iter().fold(0.0, |acc, c| acc + c.amount_requested),
        }
    }

    /// Sum over the five categories only.
    pub fn categorized(&self) -> f64 {
        self.retirement + self.death_after + self.death_during + self.medical + self.marriage
    }

    /// Amount for a category; `None` for unrecognized types.
    pub fn get(&self, claim_type: &ClaimType) -> Option<f64> {
        match claim_type {
            ClaimType::RetirementFarewell => Some(self.retirement),
            ClaimType::DeathAfterService => Some(self.death_after),
            ClaimType::DeathDuringService => Some(self.death_during),
            ClaimType::MedicalClaim => Some(self.medical),
            ClaimType::DaughtersMarriage => Some(self.marriage),
            ClaimType::Other(_) => None,
        }
    }
}

/// Distinct beneficiaries per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryCounts {
    pub retirement: usize,
    pub death_after: usize,
    pub death_during: usize,
    pub medical: usize,
    pub marriage: usize,
}

impl BeneficiaryCounts {
    pub fn from_claims(claims: &[Claim]) -> Self {
        Self {
            retirement: count_distinct_beneficiaries_by_type(claims, &ClaimType::RetirementFarewell),
            death_after: count_distinct_beneficiaries_by_type(claims, &ClaimType::DeathAfterService),
            death_during: count_distinct_beneficiaries_by_type(
                claims,
                &ClaimType::DeathDuringService,
            ),
            medical: count_distinct_beneficiaries_by_type(claims, &ClaimType::MedicalClaim),
            marriage: count_distinct_beneficiaries_by_type(claims, &ClaimType::DaughtersMarriage),
        }
    }

    pub fn get(&self, claim_type: &ClaimType) -> Option<usize> {
        match claim_type {
            ClaimType::RetirementFarewell => Some(self.retirement),
            ClaimType::DeathAfterService => Some(self.death_after),
            ClaimType::DeathDuringService => Some(self.death_during),
            ClaimType::MedicalClaim => Some(self.medical),
            ClaimType::DaughtersMarriage => Some(self.marriage),
            ClaimType::Other(_) => None,
        }
    }
}
