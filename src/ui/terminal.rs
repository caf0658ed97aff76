//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_confirmation, should_use_colors, Confirmation, NonInteractiveUI, Notifier, OutputMode,
    RelwatchTheme,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: RelwatchTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// `colors` off forces plain output; on still honors `NO_COLOR` and TTY detection.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors && should_use_colors() {
            RelwatchTheme::new()
        } else {
            RelwatchTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl Notifier for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn show_transient_message(&mut self, msg: &str) {
        if self.mode.shows_transient() {
            writeln!(self.term, "{}", self.theme.format_transient(msg)).ok();
        }
    }

    fn show_confirmation(&mut self, confirmation: &Confirmation) -> Result<bool> {
        prompt_confirmation(confirmation, &self.term)
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(Term::stderr(), "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Check if running under a CI system.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Create the appropriate UI for the environment.
///
/// `assume_yes` makes the non-interactive UI accept confirmations.
pub fn create_ui(
    interactive: bool,
    mode: OutputMode,
    assume_yes: bool,
    colors: bool,
) -> Box<dyn Notifier> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, colors))
    } else {
        Box::new(NonInteractiveUI::new(mode).assume_yes(assume_yes))
    }
}
