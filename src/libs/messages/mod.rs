pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use crate::libs::color::{colorize, Color};
use std::fmt::Display;

// Convenience functions for common message patterns
pub fn success(msg: impl Display) -> String {
    format!("{} {}", colorize(Color::Green, "✓"), msg)
}

pub fn removed(msg: impl Display) -> String {
    format!("{} {}", colorize(Color::Red, "✗"), msg)
}

pub fn reverted(msg: impl Display) -> String {
    format!("{} {}", colorize(Color::Blue, "x"), msg)
}

pub fn error(msg: impl Display) -> String {
    format!("{} {}", colorize(Color::Red, "Error:"), msg)
}
