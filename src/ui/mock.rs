//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `Notifier` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined confirmation answers.
//!
//! # Example
//!
//! ```
//! use relwatch::ui::{Confirmation, MockUI, Notifier};
//!
//! let mut ui = MockUI::new();
//! ui.set_confirmation_response("update_download", true);
//!
//! ui.show_transient_message("Looking for updates...");
//! let accepted = ui
//!     .show_confirmation(&Confirmation::new("update_download", "New", "", "Yes", "No"))
//!     .unwrap();
//!
//! assert!(accepted);
//! assert_eq!(ui.transients(), ["Looking for updates..."]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::{Confirmation, Notifier, OutputMode};

/// Mock UI implementation for testing.
///
/// Supports both single answers (via `set_confirmation_response`) and queued
/// answers (via `queue_confirmation_responses`) for keys asked multiple times.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    transients: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    confirmations: Vec<Confirmation>,
    responses: HashMap<String, bool>,
    response_queues: HashMap<String, VecDeque<bool>>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set the answer for a confirmation key.
    pub fn set_confirmation_response(&mut self, key: &str, accept: bool) {
        self.responses.insert(key.to_string(), accept);
    }

    /// Queue several answers for the same confirmation key.
    ///
    /// Answers are returned in order. After the queue is exhausted,
    /// falls back to `set_confirmation_response` or the default.
    pub fn queue_confirmation_responses(&mut self, key: &str, answers: Vec<bool>) {
        self.response_queues
            .insert(key.to_string(), answers.into_iter().collect());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured transient messages.
    pub fn transients(&self) -> &[String] {
        &self.transients
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all confirmations that were shown.
    pub fn confirmations(&self) -> &[Confirmation] {
        &self.confirmations
    }

    /// Check if a transient message containing `msg` was shown.
    pub fn has_transient(&self, msg: &str) -> bool {
        self.transients.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Count transient messages containing `msg`.
    pub fn count_transient(&self, msg: &str) -> usize {
        self.transients.iter().filter(|m| m.contains(msg)).count()
    }

    /// Whether nothing user-visible was captured.
    pub fn is_untouched(&self) -> bool {
        self.transients.is_empty()
            && self.messages.is_empty()
            && self.successes.is_empty()
            && self.warnings.is_empty()
            && self.errors.is_empty()
            && self.confirmations.is_empty()
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.transients.clear();
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.confirmations.clear();
    }
}

impl Notifier for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_transient_message(&mut self, msg: &str) {
        self.transients.push(msg.to_string());
    }

    fn show_confirmation(&mut self, confirmation: &Confirmation) -> Result<bool> {
        self.confirmations.push(confirmation.clone());

        if let Some(queue) = self.response_queues.get_mut(&confirmation.key) {
            if let Some(answer) = queue.pop_front() {
                return Ok(answer);
            }
        }

        Ok(self
            .responses
            .get(&confirmation.key)
            .copied()
            .unwrap_or(confirmation.default))
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
