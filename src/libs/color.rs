//! ANSI terminal colors.
//!
//! Every colored span produced by the application goes through [`colorize`],
//! which always appends the reset sequence so a color never bleeds into the
//! text printed after it. The table renderer strips exactly these sequences
//! when measuring cells, see [`crate::libs::table::strip_ansi`].

use crate::libs::todo::Priority;
use std::fmt::{Display, Formatter, Result};

/// The palette used by list tables, detail cards and status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    Gray,
    Bold,
}

impl Color {
    /// Raw escape sequence for this color.
    pub fn code(&self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Purple => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::Gray => "\x1b[90m",
            Color::Bold => "\x1b[1m",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.code())
    }
}

/// Wraps `text` in `color` followed by an unconditional reset.
pub fn colorize(color: Color, text: &str) -> String {
    format!("{}{}{}", color.code(), text, Color::Reset.code())
}

/// Maps a priority token to its display color.
///
/// Total over arbitrary input: anything that is not exactly `low`, `medium`
/// or `high` (including the empty string) maps to [`Color::Reset`].
pub fn priority_color(value: &str) -> Color {
    match value.parse::<Priority>() {
        Ok(Priority::High) => Color::Red,
        Ok(Priority::Medium) => Color::Yellow,
        Ok(Priority::Low) => Color::Green,
        Err(_) => Color::Reset,
    }
}
