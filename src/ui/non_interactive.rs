//! Non-interactive UI for CI/headless environments.

use crate::error::Result;

use super::{Confirmation, Notifier, OutputMode};

/// UI implementation for non-interactive mode.
///
/// Confirmations are answered without asking: `RELWATCH_CONFIRM_<KEY>`
/// wins, then `--yes`, then the confirmation's own default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    assume_yes: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            assume_yes: false,
        }
    }

    /// Accept every confirmation that has no explicit override.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    fn env_answer(key: &str) -> Option<bool> {
        let env_key = format!("RELWATCH_CONFIRM_{}", key.to_uppercase());
        let value = std::env::var(env_key).ok()?;
        Some(matches!(
            value.to_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ))
    }
}

impl Notifier for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_transient_message(&mut self, msg: &str) {
        if self.mode.shows_transient() {
            println!("{}", msg);
        }
    }

    fn show_confirmation(&mut self, confirmation: &Confirmation) -> Result<bool> {
        if self.mode.shows_status() {
            println!("{}", confirmation.title);
            if !confirmation.body.trim().is_empty() {
                println!("{}", confirmation.body);
            }
        }

        let answer = Self::env_answer(&confirmation.key)
            .unwrap_or(self.assume_yes || confirmation.default);

        if self.mode.shows_status() {
            let label = if answer {
                &confirmation.confirm_label
            } else {
                &confirmation.cancel_label
            };
            println!("-> {}", label);
        }

        Ok(answer)
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
