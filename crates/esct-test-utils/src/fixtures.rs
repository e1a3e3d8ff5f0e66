// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture builders.

use esct_core::types::{
    Beneficiary, CalendarEvent, CalendarStatus, Claim, ClaimStatus, ClaimType, Donation,
    DonationQueueItem, DonationStatus, PersonalDetails, Reference, User,
};

/// An approved claim with no beneficiary.
pub fn claim(id: &str, claim_type: ClaimType, amount_requested: f64) -> Claim {
    Claim {
        id: Some(id.to_string()),
        claim_type,
        title: format!("Claim {id}"),
        status: ClaimStatus::Approved,
        amount_requested,
        ..Claim::default()
    }
}

/// A claim whose beneficiary is populated with `beneficiary_id`.
pub fn claim_for(
    id: &str,
    claim_type: ClaimType,
    amount_requested: f64,
    beneficiary_id: &str,
) -> Claim {
    Claim {
        beneficiary: Some(Reference::Populated(Box::new(beneficiary(beneficiary_id)))),
        ..claim(id, claim_type, amount_requested)
    }
}

pub fn beneficiary(id: &str) -> Beneficiary {
    Beneficiary {
        id: Some(id.to_string()),
        personal_details: PersonalDetails {
            full_name: format!("Beneficiary {id}"),
            ..PersonalDetails::default()
        },
        ..Beneficiary::default()
    }
}

pub fn donation(amount: f64, status: DonationStatus) -> Donation {
    Donation {
        amount,
        status,
        ..Donation::default()
    }
}

pub fn event(month_year: &str, status: CalendarStatus, donations_completed: u32) -> CalendarEvent {
    CalendarEvent {
        month_year: month_year.to_string(),
        status,
        donations_completed,
    }
}

pub fn queued(claim_id: &str) -> DonationQueueItem {
    DonationQueueItem {
        claim_id: Some(Reference::Id(claim_id.to_string())),
        donation_id: None,
    }
}

pub fn user(id: &str, full_name: &str) -> User {
    User {
        id: Some(id.to_string()),
        personal_details: PersonalDetails {
            full_name: full_name.to_string(),
            ..PersonalDetails::default()
        },
        is_active: true,
        is_verified: true,
        ..User::default()
    }
}
