//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the config and build every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::build_info::BuildInfo;
use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::RelwatchConfig;
use crate::error::{RelwatchError, Result};
use crate::screen::AboutScreen;
use crate::ui::Notifier;
use crate::updates::{GithubUpdateChecker, UpdateChecker};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
#[async_trait(?Send)]
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    async fn execute(&self, ui: &mut dyn Notifier) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Loaded configuration and build metadata shared by commands.
#[derive(Clone)]
pub struct CommandContext {
    config: RelwatchConfig,
    config_path: PathBuf,
    build: BuildInfo,
    checker: Option<Arc<dyn UpdateChecker>>,
}

impl CommandContext {
    /// Context for the running binary.
    pub fn new(config: RelwatchConfig, config_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            config_path: config_path.into(),
            build: BuildInfo::current(),
            checker: None,
        }
    }

    /// Override the build metadata.
    pub fn with_build(mut self, build: BuildInfo) -> Self {
        self.build = build;
        self
    }

    /// Check with `checker` instead of the configured GitHub feed.
    pub fn with_checker(mut self, checker: Arc<dyn UpdateChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    /// Loaded configuration.
    pub fn config(&self) -> &RelwatchConfig {
        &self.config
    }

    /// Where the configuration lives.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Build metadata.
    pub fn build(&self) -> &BuildInfo {
        &self.build
    }

    /// Checker for the configured feed.
    pub fn checker(&self) -> Result<Arc<dyn UpdateChecker>> {
        if let Some(checker) = &self.checker {
            return Ok(Arc::clone(checker));
        }
        let checker = GithubUpdateChecker::from_config(&self.config)
            .map_err(|e| RelwatchError::Other(e.into()))?;
        Ok(Arc::new(checker))
    }

    /// A detached about screen backed by [`Self::checker`].
    pub fn about_screen(&self) -> Result<AboutScreen> {
        Ok(AboutScreen::new(
            self.checker()?,
            self.config.clone(),
            &self.config_path,
            self.build.clone(),
        ))
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher over `context`.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub async fn dispatch(&self, cli: &Cli, ui: &mut dyn Notifier) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui).await
            }
            Some(Commands::About(args)) => {
                let cmd = super::about::AboutCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui).await
            }
            Some(Commands::Auto(args)) => {
                let cmd = super::auto::AutoCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui).await
            }
            Some(Commands::Watch(args)) => {
                let cmd = super::watch::WatchCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui).await
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui).await
            }
            None => {
                // Default to a one-off check
                let cmd =
                    super::check::CheckCommand::new(self.context.clone(), CheckArgs::default());
                cmd.execute(ui).await
            }
        }
    }
}
