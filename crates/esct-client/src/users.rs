// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use esct_core::types::CalendarEvent;
use esct_core::EsctError;

use crate::client::ApiClient;

impl ApiClient {
    /// `GET /users/calendar`: the caller's month-by-month donation record.
    pub async fn calendar(&self) -> Result<Vec<CalendarEvent>, EsctError> {
        self.fetch_list(&["users", "calendar"], &[]).await
    }
}
