//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::ui::OutputMode;

/// relwatch - Check a GitHub release feed for a newer version.
#[derive(Debug, Parser)]
#[command(name = "relwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ~/.relwatch/config.yml)
    #[arg(short, long, global = true, env = "RELWATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// No output except errors
    #[arg(long, global = true)]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check for a newer release (default if no command specified)
    Check(CheckArgs),

    /// Show version and build information
    About(AboutArgs),

    /// Turn automatic update checks on or off
    Auto(AutoArgs),

    /// Check for updates periodically until interrupted
    Watch(WatchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Download a newer release without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Download directory (overrides the configured one)
    #[arg(long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,
}

/// Arguments for the `about` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AboutArgs {
    /// Check for updates after showing the screen
    #[arg(long)]
    pub check: bool,
}

/// Desired state of automatic checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    /// Whether this is `on`.
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}

/// Arguments for the `auto` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AutoArgs {
    /// Turn automatic checks on or off; omit to show the current state
    #[arg(value_enum)]
    pub state: Option<Toggle>,
}

/// Arguments for the `watch` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct WatchArgs {
    /// Seconds between checks (overrides updates.interval_hours)
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Stop after this many checks
    #[arg(long, value_name = "N")]
    pub count: Option<u64>,

    /// Watch even when automatic checks are off
    #[arg(long)]
    pub force: bool,

    /// Download newer releases without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    /// Output mode from the verbosity flags. The quietest flag wins.
    pub fn output_mode(&self) -> OutputMode {
        if self.silent {
            OutputMode::Silent
        } else if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Whether the chosen command auto-confirms downloads.
    pub fn assume_yes(&self) -> bool {
        match &self.command {
            Some(Commands::Check(args)) => args.yes,
            Some(Commands::Watch(args)) => args.yes,
            _ => false,
        }
    }
}
