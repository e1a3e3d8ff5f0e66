// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `esct dashboard` command implementation.
//!
//! Loads the member dashboard in one round of parallel requests and renders
//! it as text or JSON. Slices that failed to load are shown as such rather
//! than aborting the command.

use colored::Colorize;
use esct_client::ApiClient;
use esct_config::EsctConfig;
use esct_core::{CalendarStatus, ClaimType, EsctError};
use esct_dashboard::{DashboardLoader, DashboardSnapshot, DonationCalendar};

use crate::output;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub async fn run_dashboard(
    client: &ApiClient,
    config: &EsctConfig,
    json: bool,
    plain: bool,
) -> Result<(), EsctError> {
    let snapshot = DashboardLoader::new()
        .include_content(config.dashboard.include_content)
        .load(client)
        .await;

    if json {
        return output::print_json(&snapshot);
    }
    print!("{}", render(&snapshot, output::use_color(plain)));
    Ok(())
}

fn render(snapshot: &DashboardSnapshot, color: bool) -> String {
    let mut out = String::new();
    let name = snapshot
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "(profile unavailable)".to_string());

    out.push_str(&format!("\n  ESCT dashboard: {name}\n  {}\n", "-".repeat(35)));

    out.push_str("\n  Claims by category       requested  beneficiaries\n");
    for claim_type in ClaimType::CATEGORIES.iter() {
        let requested = snapshot.claim_totals.get(claim_type).unwrap_or(0.0);
        let people = snapshot.beneficiaries.get(claim_type).unwrap_or(0);
        out.push_str(&format!(
            "    {:<22}{:>11}  {:>13}\n",
            claim_type.label(),
            output::amount(requested),
            people
        ));
    }
    out.push_str(&format!(
        "    {:<22}{:>11}\n",
        "All claims",
        output::amount(snapshot.claim_totals.total)
    ));

    out.push_str(&format!(
        "\n  Your contributions: {}\n",
        output::amount(snapshot.total_contributed)
    ));
    out.push_str(&format!("  Queued claims:      {}\n", snapshot.queue.len()));

    out.push_str(&render_calendar(&snapshot.calendar, color));

    if !snapshot.news.is_empty() {
        out.push_str("\n  News\n");
        for item in snapshot.news.iter().take(3) {
            out.push_str(&format!("    - {}\n", item.title));
        }
    }

    if !snapshot.is_complete() {
        out.push('\n');
        for failure in &snapshot.failures {
            out.push_str(&format!(
                "  {} could not load {}: {}\n",
                output::marker(false, color),
                failure.slice,
                failure.message
            ));
        }
    }
    out.push('\n');
    out
}

fn render_calendar(calendar: &DonationCalendar, color: bool) -> String {
    let mut out = format!(
        "\n  Donation calendar ({} donations)\n",
        calendar.total_donations
    );
    if calendar.is_empty() {
        out.push_str("    no records yet\n");
        return out;
    }

    out.push_str(&format!("    {:<6}", ""));
    for month in MONTHS {
        out.push_str(&format!("{month:<4}"));
    }
    out.push('\n');

    for (year, slots) in &calendar.calendar {
        out.push_str(&format!("    {year:<6}"));
        for slot in slots {
            let cell = match slot.as_ref().map(|e| e.status) {
                Some(CalendarStatus::Completed) => paint("##", color, true),
                Some(CalendarStatus::Partial) => paint("#-", color, false),
                Some(CalendarStatus::Pending) => "--".to_string(),
                None => "..".to_string(),
            };
            out.push_str(&cell);
            out.push_str("  ");
        }
        out.push('\n');
    }
    if calendar.skipped > 0 {
        out.push_str(&format!(
            "    ({} record(s) with an unreadable month were left out)\n",
            calendar.skipped
        ));
    }
    out
}

fn paint(cell: &str, color: bool, complete: bool) -> String {
    match (color, complete) {
        (false, _) => cell.to_string(),
        (true, true) => cell.green().to_string(),
        (true, false) => cell.yellow().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esct_dashboard::{BeneficiaryCounts, ClaimTotals, SliceFailure};
    use esct_test_utils::fixtures::{claim_for, event, user};

    fn snapshot() -> DashboardSnapshot {
        let claims = vec![claim_for("c1", ClaimType::MedicalClaim, 8000.0, "b1")];
        let events = vec![
            event("2024-01", CalendarStatus::Completed, 2),
            event("2024-03", CalendarStatus::Partial, 1),
        ];
        DashboardSnapshot {
            user: Some(user("u1", "Asha Rao")),
            claim_totals: ClaimTotals::from_claims(&claims),
            beneficiaries: BeneficiaryCounts::from_claims(&claims),
            calendar: DonationCalendar::build(&events),
            total_contributed: 1500.0,
            claims,
            ..DashboardSnapshot::default()
        }
    }

    #[test]
    fn renders_plain_summary() {
        let text = render(&snapshot(), false);
        assert!(text.contains("ESCT dashboard: Asha Rao"));
        assert!(text.contains("Medical Claim"));
        assert!(text.contains("8,000"));
        assert!(text.contains("Your contributions: 1,500"));
        assert!(text.contains("Donation calendar (3 donations)"));
        assert!(text.contains("2024  ##  ..  #-"));
    }

    #[test]
    fn failed_slices_are_listed() {
        let mut snap = snapshot();
        snap.user = None;
        snap.failures.push(SliceFailure {
            slice: "user",
            message: "API error (401): Token expired".into(),
        });
        let text = render(&snap, false);
        assert!(text.contains("(profile unavailable)"));
        assert!(text.contains("[FAIL] could not load user"));
    }

    #[test]
    fn empty_calendar_message() {
        let text = render_calendar(&DonationCalendar::default(), false);
        assert!(text.contains("no records yet"));
    }
}
