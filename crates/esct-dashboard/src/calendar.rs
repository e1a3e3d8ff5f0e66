// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Donation Calendar Builder.
//!
//! Turns the flat list of per-month events from `/users/calendar` into a
//! year-indexed grid of twelve month slots.

use std::collections::BTreeMap;

use esct_core::CalendarEvent;
use serde::Serialize;
use tracing::warn;

/// Twelve month slots, January first.
pub type MonthSlots = [Option<CalendarEvent>; 12];

/// A member's donation record laid out by year and month.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationCalendar {
    /// Years present in the input, ascending.
    pub calendar: BTreeMap<i32, MonthSlots>,
    /// Sum of `donationsCompleted` over every event, placed or not.
    pub total_donations: u64,
    /// Events whose `monthYear` could not be parsed.
    pub skipped: usize,
}

impl DonationCalendar {
    /// Build the grid from events in the order given.
    ///
    /// Two events for the same month: the later one wins. Events with a
    /// malformed `monthYear` still count toward the total but are not placed.
    pub fn build<'a>(events: impl IntoIterator<Item = &'a CalendarEvent>) -> Self {
        let mut out = Self::default();

        for event in events {
            out.total_donations += u64::from(event.donations_completed);

            let Some((year, month)) = event.year_month() else {
                warn!(month_year = %event.month_year, "skipping calendar event with malformed monthYear");
                out.skipped += 1;
                continue;
            };

            let slots = out.calendar.entry(year).or_default();
            slots[(month - 1) as usize] = Some(event.clone());
        }

        out
    }

    pub fn is_empty(&self) -> bool {
        self.calendar.is_empty()
    }

    /// The event for `month` (1-indexed) of `year`, if any.
    pub fn month(&self, year: i32, month: u32) -> Option<&CalendarEvent> {
        if !(1..=12).contains(&month) {
            return None;
        }
        self.calendar
            .get(&year)
            .and_then(|slots| slots[(month - 1) as usize].as_ref())
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.calendar.keys().copied()
    }
}
