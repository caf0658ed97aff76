//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command that touches the
//! feed goes through the about screen built by [`CommandContext`].

pub mod about;
pub mod auto;
pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod watch;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
