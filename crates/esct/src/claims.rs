// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `esct claims`, `esct claim`, `esct donate`.

use colored::Colorize;
use esct_client::{ApiClient, CreateOrder};
use esct_core::types::Page;
use esct_core::{Claim, ClaimStatus, ClaimType, EsctError};
use tracing::debug;

use crate::output;

/// Filters accepted by `esct claims`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimQuery {
    pub claim_type: Option<String>,
    pub page: u32,
    pub limit: u32,
    pub mine: bool,
}

pub async fn run_claims(
    client: &ApiClient,
    query: ClaimQuery,
    json: bool,
    plain: bool,
) -> Result<(), EsctError> {
    let page = match (&query.claim_type, query.mine) {
        (Some(raw), _) => {
            let claim_type = ClaimType::parse(raw);
            if !claim_type.is_recognized() {
                let known: Vec<&str> = ClaimType::CATEGORIES.iter().map(ClaimType::label).collect();
                return Err(EsctError::Validation(format!(
                    "unknown claim type `{raw}`; expected one of: {}",
                    known.join(", ")
                )));
            }
            client
                .claims_by_type(&claim_type, query.page, query.limit)
                .await?
        }
        (None, true) => paginate(client.my_claims().await?, query.page, query.limit),
        (None, false) => paginate(client.claims().await?, query.page, query.limit),
    };
    debug!(items = page.items.len(), total = page.total, "claims fetched");

    if json {
        return output::print_json(&page);
    }

    let color = output::use_color(plain);
    if page.items.is_empty() {
        println!("No claims found.");
        return Ok(());
    }
    for claim in &page.items {
        println!("{}", claim_line(claim, color));
    }
    println!(
        "\npage {} of {} ({} claims)",
        page.page,
        page.pages.max(1),
        page.total
    );
    Ok(())
}

pub async fn run_claim(
    client: &ApiClient,
    id: &str,
    json: bool,
    plain: bool,
) -> Result<(), EsctError> {
    let claim = client.claim(id).await?;
    if json {
        return output::print_json(&claim);
    }

    let color = output::use_color(plain);
    output::header(&format!("{} ({})", claim.title, claim.reference()));
    println!("    Type:        {}", claim.claim_type);
    println!("    Status:      {}", status_text(claim.status, color));
    println!(
        "    Raised:      {} of {}",
        output::amount(claim.amount_raised),
        output::amount(claim.amount_requested)
    );
    println!(
        "    Progress:    {}",
        output::progress(claim.percent_funded(), color)
    );
    if let Some(beneficiary) = claim.beneficiary.as_ref().and_then(|b| b.populated()) {
        println!(
            "    Beneficiary: {}",
            beneficiary.personal_details.full_name
        );
    }
    if !claim.description.trim().is_empty() {
        println!();
        println!("    {}", claim.description.trim());
    }
    println!();
    Ok(())
}

pub async fn run_donate(
    client: &ApiClient,
    claim_id: &str,
    amount: f64,
    json: bool,
) -> Result<(), EsctError> {
    let order = client
        .create_order(&CreateOrder {
            claim_id: claim_id.to_string(),
            amount,
        })
        .await?;
    if json {
        return output::print_json(&order);
    }
    println!("Payment order {} created", order.order_id);
    println!(
        "  Amount: {} {}",
        output::amount(order.amount),
        order.currency
    );
    println!("  Complete the payment in the ESCT web app to confirm the donation.");
    Ok(())
}

/// Slice an unpaginated listing into the requested page.
fn paginate(claims: Vec<Claim>, page: u32, limit: u32) -> Page<Claim> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = claims.len() as u64;
    let skip = (page - 1) as usize * limit as usize;
    Page {
        items: claims.into_iter().skip(skip).take(limit as usize).collect(),
        page,
        limit,
        total,
        pages: total.div_ceil(u64::from(limit)) as u32,
    }
}

fn claim_line(claim: &Claim, color: bool) -> String {
    format!(
        "{:<14} {:<22} {:>12}  {}  {}",
        claim.reference(),
        claim.claim_type.label(),
        output::amount(claim.amount_requested),
        output::progress(claim.percent_funded(), color),
        claim.title
    )
}

fn status_text(status: ClaimStatus, color: bool) -> String {
    let text = status.to_string();
    if !color {
        return text;
    }
    match status {
        ClaimStatus::Approved | ClaimStatus::FullyFunded => text.green().to_string(),
        ClaimStatus::Rejected => text.red().to_string(),
        ClaimStatus::PendingVerification => text.yellow().to_string(),
        ClaimStatus::Closed | ClaimStatus::Unknown => text,
    }
}
