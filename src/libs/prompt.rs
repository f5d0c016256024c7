//! Yes/no confirmation before destructive commands.
//!
//! Commands receive a `&dyn Confirmation` instead of prompting directly, so
//! the interactive terminal prompt can be replaced in non-interactive use.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

pub trait Confirmation {
    /// Asks the user to confirm `prompt`. Declining is `Ok(false)`, not an error.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal prompt defaulting to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractiveConfirmation;

impl Confirmation for InteractiveConfirmation {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
