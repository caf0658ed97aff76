//! About command implementation.
//!
//! The `relwatch about` command renders the about screen.

use crate::cli::args::AboutArgs;
use crate::error::Result;
use crate::screen::Screen;
use crate::ui::Notifier;
use crate::updates::RecordingHandoff;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The about command implementation.
pub struct AboutCommand {
    context: CommandContext,
    args: AboutArgs,
}

impl AboutCommand {
    /// Create a new about command.
    pub fn new(context: CommandContext, args: AboutArgs) -> Self {
        Self { context, args }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for AboutCommand {
    async fn execute(&self, ui: &mut dyn Notifier) -> Result<CommandResult> {
        let mut screen = self.context.about_screen()?;
        screen.open();

        ui.show_header(&format!("{} {}", screen.title(), self.context.config().app.name));
        for (title, value) in screen.rows() {
            ui.message(&format!("{:<34}{}", title, value));
        }

        if self.args.check {
            // Offers are shown but not downloaded from here; use `check`.
            let handoff = RecordingHandoff::new();
            if screen.check_version(ui).is_some() {
                screen.await_result(ui, &handoff).await;
            }
            for url in handoff.urls() {
                ui.message(&format!("Download: {}", url));
            }
        }

        screen.teardown();
        Ok(CommandResult::success())
    }
}
