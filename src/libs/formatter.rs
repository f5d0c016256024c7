//! Date formatting for terminal display.
//!
//! Due dates are shown as `YYYY-MM-DD`, colored by how close they are:
//!
//! | days until due | color  | text                   |
//! |----------------|--------|------------------------|
//! | < 0            | red    | `2025-01-01 (OVERDUE)` |
//! | 0              | red    | `2025-01-01 (TODAY)`   |
//! | 1              | yellow | `2025-01-01 (tomorrow)`|
//! | 2..=3          | yellow | `2025-01-01`           |
//! | > 3            | green  | `2025-01-01`           |
//!
//! A todo without a due date renders as an empty string with no color codes.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use todo_cli::libs::formatter::format_due_date_on;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let due = NaiveDate::from_ymd_opt(2025, 3, 11);
//! assert!(format_due_date_on(due, today).contains("(tomorrow)"));
//! assert_eq!(format_due_date_on(None, today), "");
//! ```

use crate::libs::color::{colorize, Color};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Input and output format for due dates at every boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used for creation timestamps on the detail card.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats a due date relative to the current local day.
pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    format_due_date_on(due_date, Local::now().date_naive())
}

/// Formats a due date relative to `today`.
pub fn format_due_date_on(due_date: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(due) = due_date else {
        return String::new();
    };

    let date = due.format(DATE_FORMAT).to_string();
    match (due - today).num_days() {
        days if days < 0 => colorize(Color::Red, &format!("{} (OVERDUE)", date)),
        0 => colorize(Color::Red, &format!("{} (TODAY)", date)),
        1 => colorize(Color::Yellow, &format!("{} (tomorrow)", date)),
        2..=3 => colorize(Color::Yellow, &date),
        _ => colorize(Color::Green, &date),
    }
}

/// Creation timestamps are stored in UTC and shown in local time.
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}
