use crate::libs::color::{priority_color, Color};
use crate::libs::error::TodoError;
use crate::libs::formatter::DATE_FORMAT;
use crate::libs::messages::Message;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed urgency tag of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// True only for the exact lowercase tokens `low`, `medium` and `high`.
    pub fn is_valid(value: &str) -> bool {
        Self::ALL.iter().any(|p| p.as_str() == value)
    }

    pub fn color(&self) -> Color {
        priority_color(self.as_str())
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| TodoError::Validation(Message::InvalidPriority(s.to_string())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub priority: Priority,
    /// Empty means uncategorized.
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<NaiveDate>,
}

/// Completion-state restriction applied by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Completed,
    Any,
}

#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub show_all: bool,
    pub show_done: bool,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl TodoFilter {
    /// `show_done` wins over `show_all`; with neither set only pending todos are listed.
    pub fn status(&self) -> StatusFilter {
        if self.show_done {
            StatusFilter::Completed
        } else if self.show_all {
            StatusFilter::Any
        } else {
            StatusFilter::Pending
        }
    }
}

/// Partial update of a todo. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    /// `Some("")` moves the todo back to uncategorized.
    pub category: Option<String>,
    /// `Some(None)` removes the due date.
    pub due_date: Option<Option<NaiveDate>>,
}

impl TodoUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.priority.is_none() && self.category.is_none() && self.due_date.is_none()
    }
}

/// Which rows a bulk count or clear addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearScope {
    Completed,
    All,
}

/// Parses a due date given strictly as `YYYY-MM-DD`.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, TodoError> {
    let invalid = || TodoError::Validation(Message::InvalidDateFormat(value.to_string()));

    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !well_shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
