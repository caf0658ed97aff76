//! Auto command implementation.
//!
//! The `relwatch auto [on|off]` command shows or sets the automatic
//! updates switch of the about screen.

use crate::cli::args::AutoArgs;
use crate::error::Result;
use crate::ui::Notifier;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The auto command implementation.
pub struct AutoCommand {
    context: CommandContext,
    args: AutoArgs,
}

impl AutoCommand {
    /// Create a new auto command.
    pub fn new(context: CommandContext, args: AutoArgs) -> Self {
        Self { context, args }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for AutoCommand {
    async fn execute(&self, ui: &mut dyn Notifier) -> Result<CommandResult> {
        let mut screen = self.context.about_screen()?;

        let Some(state) = self.args.state else {
            let current = if screen.automatic_updates() { "on" } else { "off" };
            ui.message(&format!("Automatic updates: {}", current));
            return Ok(CommandResult::success());
        };

        if !screen.updater_enabled() {
            ui.warning("Update checks are disabled");
            return Ok(CommandResult::failure(2));
        }

        screen.set_automatic_updates(state.enabled())?;
        ui.success(&format!(
            "Automatic updates turned {} ({})",
            if state.enabled() { "on" } else { "off" },
            self.context.config_path().display()
        ));
        Ok(CommandResult::success())
    }
}
