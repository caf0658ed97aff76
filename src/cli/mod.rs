//! Command-line interface for relwatch.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AboutArgs, AutoArgs, CheckArgs, Cli, Commands, CompletionsArgs, Toggle, WatchArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
