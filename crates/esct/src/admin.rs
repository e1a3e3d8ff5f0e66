// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `esct admin` command implementation.

use std::str::FromStr;

use esct_client::{ApiClient, ClaimDecision, VerifyClaim};
use esct_config::{SettingCategory, SettingsRegistry};
use esct_core::admin::AdminStats;
use esct_core::EsctError;

use crate::output;
use crate::{AdminAction, AdminConfigAction};

pub async fn run_admin(client: &ApiClient, action: AdminAction) -> Result<(), EsctError> {
    match action {
        AdminAction::Stats { json, plain } => {
            let stats = client.admin().stats().await?;
            if json {
                return output::print_json(&stats);
            }
            print_stats(&stats, output::use_color(plain));
            Ok(())
        }
        AdminAction::VerifyClaim { id, status, notes } => {
            let decision = ClaimDecision::from_str(status.trim()).map_err(|_| {
                EsctError::Validation(format!(
                    "status `{status}` must be Approved or Rejected"
                ))
            })?;
            let claim = client
                .admin()
                .verify_claim(
                    &id,
                    &VerifyClaim {
                        status: decision,
                        verification_notes: notes,
                    },
                )
                .await?;
            println!("{}: {}", claim.reference(), claim.status);
            Ok(())
        }
        AdminAction::Config { action } => run_config(client, action).await,
    }
}

async fn run_config(client: &ApiClient, action: AdminConfigAction) -> Result<(), EsctError> {
    match action {
        AdminConfigAction::List { json } => {
            let entries = client.admin().config().await?;
            if json {
                return output::print_json(&entries);
            }
            let registry = client.settings();
            for entry in &entries {
                let marker = if registry.get(&entry.key).is_some() { ' ' } else { '?' };
                println!("{marker} {:<34} {}", entry.key, entry.value);
            }
            Ok(())
        }
        AdminConfigAction::Set { key, value } => {
            let applied = client.admin().update_config_str(&key, &value).await?;
            println!("{key} = {applied}");
            Ok(())
        }
        AdminConfigAction::Keys { category } => {
            let category = category.as_deref().map(parse_category).transpose()?;
            print!("{}", render_keys(client.settings(), category));
            Ok(())
        }
    }
}

fn parse_category(raw: &str) -> Result<SettingCategory, EsctError> {
    const ALL: [SettingCategory; 6] = [
        SettingCategory::Donations,
        SettingCategory::Claims,
        SettingCategory::Payments,
        SettingCategory::Credit,
        SettingCategory::Security,
        SettingCategory::System,
    ];
    let wanted = raw.trim().to_ascii_lowercase();
    ALL.into_iter()
        .find(|c| c.as_str() == wanted)
        .ok_or_else(|| {
            let names: Vec<&str> = ALL.iter().map(SettingCategory::as_str).collect();
            EsctError::Validation(format!(
                "unknown category `{raw}`; expected one of: {}",
                names.join(", ")
            ))
        })
}

fn render_keys(registry: &SettingsRegistry, category: Option<SettingCategory>) -> String {
    let mut out = String::new();
    let mut current = None;
    let mut specs: Vec<_> = registry
        .iter()
        .filter(|s| category.is_none_or(|c| s.category == c))
        .collect();
    specs.sort_by_key(|s| (s.category, s.key));

    for spec in specs {
        if current != Some(spec.category) {
            current = Some(spec.category);
            out.push_str(&format!("\n[{}]\n", spec.category));
        }
        out.push_str(&format!(
            "  {:<34} {}\n      {}\n",
            spec.key,
            spec.kind.describe(),
            spec.description
        ));
    }
    out
}

fn print_stats(stats: &AdminStats, color: bool) {
    output::header("ESCT platform");
    println!(
        "    Users:     {} ({} active)",
        stats.total_users, stats.active_users
    );
    println!(
        "    Claims:    {} ({} pending, {} approved)",
        stats.total_claims, stats.pending_claims, stats.approved_claims
    );
    println!("    Donations: {}", stats.total_donations);
    println!(
        "    Raised:    {}",
        output::amount(stats.total_amount_raised)
    );
    if stats.pending_claims > 0 {
        println!();
        println!(
            "  {} {} claim(s) awaiting verification",
            output::marker(false, color),
            stats.pending_claims
        );
    }
    println!();
}
