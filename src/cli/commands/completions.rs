//! Shell completions generation.
//!
//! The `relwatch completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::Notifier;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for CompletionsCommand {
    async fn execute(&self, _ui: &mut dyn Notifier) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.args.shell,
            &mut cmd,
            "relwatch",
            &mut std::io::stdout(),
        );
        Ok(CommandResult::success())
    }
}
