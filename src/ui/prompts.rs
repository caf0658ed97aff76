//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use std::io::Write;

use crate::error::{RelwatchError, Result};

use super::Confirmation;

/// Convert dialoguer errors to RelwatchError.
fn map_dialoguer_err(e: dialoguer::Error) -> RelwatchError {
    RelwatchError::PromptFailed {
        message: e.to_string(),
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Show the confirmation body, then ask the accept/decline question.
pub fn prompt_confirmation(confirmation: &Confirmation, term: &Term) -> Result<bool> {
    let mut out = term.clone();
    writeln!(out, "\n{}", style(&confirmation.title).bold())?;
    if !confirmation.body.trim().is_empty() {
        writeln!(out)?;
        for line in confirmation.body.lines() {
            writeln!(out, "  {}", line)?;
        }
        writeln!(out)?;
    }

    Confirm::with_theme(&prompt_theme())
        .with_prompt(confirmation.question())
        .default(confirmation.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
