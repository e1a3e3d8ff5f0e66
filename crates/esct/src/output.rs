// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared terminal output helpers.

use std::io::IsTerminal;

use colored::Colorize;
use esct_core::EsctError;
use serde::Serialize;

/// Colors only when asked for and stdout is a terminal.
pub fn use_color(plain: bool) -> bool {
    !plain && std::io::stdout().is_terminal()
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), EsctError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| EsctError::Internal(format!("failed to encode output: {e}")))?;
    println!("{text}");
    Ok(())
}

/// Thousands separators and two decimals, dropping a `.00` tail.
pub fn amount(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if frac == "00" {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Section header in the style of the other commands.
pub fn header(title: &str) {
    println!();
    println!("  {title}");
    println!("  {}", "-".repeat(35));
}

/// `[OK]` / `[FAIL]` marker, or a colored check mark.
pub fn marker(ok: bool, color: bool) -> String {
    match (ok, color) {
        (true, true) => "✓".green().to_string(),
        (false, true) => "✗".red().to_string(),
        (true, false) => "[OK]".to_string(),
        (false, false) => "[FAIL]".to_string(),
    }
}

/// Text bar like `[#####-----] 50%`.
pub fn progress(percent: u8, color: bool) -> String {
    let filled = usize::from(percent.min(100)) / 10;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled));
    let bar = if color && percent >= 100 {
        bar.green().to_string()
    } else {
        bar
    };
    format!("[{bar}] {percent:>3}%")
}
