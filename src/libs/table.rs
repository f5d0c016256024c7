//! Box-drawn fixed-width tables for terminal output.
//!
//! Column widths are tracked as cells are added and measured in *visible*
//! characters: ANSI color sequences are stripped before counting, and the
//! count is in Unicode scalar values rather than bytes. Widths only grow.
//!
//! ```text
//! ┌────┬───────┐
//! │ ID │ Title │
//! ├────┼───────┤
//! │ 1  │ Short │
//! └────┴───────┘
//! ```

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Matches a single SGR color marker, `ESC [ <digits/semicolons> m`.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

const FILL: &str = "─";
const BAR: &str = "│";

/// Removes all color markers from `text`.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Character count of `text` once color markers are removed.
pub fn visible_width(text: &str) -> usize {
    strip_ansi(text).chars().count()
}

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    /// Creates a table whose initial column widths are the header widths.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = headers.iter().map(|h| visible_width(h)).collect();

        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    /// Appends a row, widening any column whose cell is wider than seen so far.
    ///
    /// Cells beyond the header count are kept but never rendered.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(visible_width(cell));
        }
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the whole table, one line per border or row.
    ///
    /// Returns an empty string when no rows were added.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.border("┌", "┬", "┐"));
        lines.push(self.line(&self.headers));
        lines.push(self.border("├", "┼", "┤"));
        for row in &self.rows {
            lines.push(self.line(row));
        }
        lines.push(self.border("└", "┴", "┘"));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| FILL.repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    }

    fn line(&self, cells: &[String]) -> String {
        let parts: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                let padding = width.saturating_sub(visible_width(cell));
                format!(" {}{} ", cell, " ".repeat(padding))
            })
            .collect();
        format!("{}{}{}", BAR, parts.join(BAR), BAR)
    }
}
