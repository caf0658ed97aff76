//! User-facing notifications and confirmations.
//!
//! This module provides:
//! - [`Notifier`] trait, the seam every user-visible effect goes through
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use relwatch::ui::{create_ui, Notifier, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet, false, false);
//! ui.show_header("About");
//! ui.success("Up to date");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_confirmation;
pub use terminal::{create_ui, is_ci, TerminalUI};
pub use theme::{should_use_colors, RelwatchTheme};

use crate::error::Result;

/// Trait for surfacing messages and confirmations to the user.
///
/// This trait allows mocking the UI in tests.
pub trait Notifier {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show a short-lived, non-blocking notice.
    fn show_transient_message(&mut self, msg: &str);

    /// Show a blocking accept/decline prompt. Returns `true` on accept.
    fn show_confirmation(&mut self, confirmation: &Confirmation) -> Result<bool>;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Unique key for the prompt (used for scripted answers).
    pub key: String,
    /// Title line.
    pub title: String,
    /// Body text, possibly multi-line.
    pub body: String,
    /// Label of the accepting choice.
    pub confirm_label: String,
    /// Label of the declining choice.
    pub cancel_label: String,
    /// Answer used when the user just presses enter.
    pub default: bool,
}

impl Confirmation {
    /// Create a confirmation that defaults to declining.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        confirm_label: impl Into<String>,
        cancel_label: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            body: body.into(),
            confirm_label: confirm_label.into(),
            cancel_label: cancel_label.into(),
            default: false,
        }
    }

    /// The question line shown next to the answer.
    pub fn question(&self) -> String {
        format!(
            "{}? ({} / {})",
            self.title.trim_end_matches(['!', '?', '.']),
            self.confirm_label,
            self.cancel_label
        )
    }
}
