// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `esct queue` command implementation.

use esct_client::ApiClient;
use esct_core::{DonationQueueItem, EsctError};
use esct_dashboard::settle_all;
use serde::Serialize;

use crate::QueueAction;
use crate::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueueRow {
    claim_id: Option<String>,
    title: Option<String>,
    amount_requested: Option<f64>,
    percent_funded: Option<u8>,
}

impl From<&DonationQueueItem> for QueueRow {
    fn from(item: &DonationQueueItem) -> Self {
        let claim = item.claim_id.as_ref().and_then(|r| r.populated());
        Self {
            claim_id: item.claim_key().map(str::to_string),
            title: claim.map(|c| c.title.clone()),
            amount_requested: claim.map(|c| c.amount_requested),
            percent_funded: claim.map(|c| c.percent_funded()),
        }
    }
}

pub async fn run_queue(client: &ApiClient, action: QueueAction) -> Result<(), EsctError> {
    match action {
        QueueAction::List { json } => {
            let rows: Vec<QueueRow> = client
                .donation_queue()
                .await?
                .iter()
                .map(QueueRow::from)
                .collect();
            if json {
                return output::print_json(&rows);
            }
            if rows.is_empty() {
                println!("Your donation queue is empty.");
            }
            for row in &rows {
                println!("{}", row_line(row));
            }
            Ok(())
        }
        QueueAction::Add { claim_ids } => {
            let results =
                settle_all(claim_ids.iter().map(|id| client.add_to_queue(id))).await;
            report(&claim_ids, results, "queued")
        }
        QueueAction::Remove { claim_ids } => {
            let results =
                settle_all(claim_ids.iter().map(|id| client.remove_from_queue(id))).await;
            report(&claim_ids, results, "removed")
        }
    }
}

/// One line per claim; fails if any claim failed.
fn report(
    claim_ids: &[String],
    results: Vec<Result<(), EsctError>>,
    verb: &str,
) -> Result<(), EsctError> {
    let mut failed = 0;
    for (id, result) in claim_ids.iter().zip(results) {
        match result {
            Ok(()) => println!("{id}: {verb}"),
            Err(e) => {
                failed += 1;
                eprintln!("{id}: {}", e.display_message());
            }
        }
    }
    if failed > 0 {
        return Err(EsctError::Internal(format!(
            "{failed} of {} claim(s) could not be {verb}",
            claim_ids.len()
        )));
    }
    Ok(())
}

fn row_line(row: &QueueRow) -> String {
    let id = row.claim_id.as_deref().unwrap_or("-");
    match (&row.title, row.amount_requested, row.percent_funded) {
        (Some(title), Some(amount), Some(percent)) => format!(
            "{id:<26} {:>12}  {percent:>3}%  {title}",
            output::amount(amount)
        ),
        _ => id.to_string(),
    }
}
