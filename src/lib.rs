//! relwatch - Check a GitHub release feed for a newer version.
//!
//! relwatch asks a release feed whether a newer version of an application
//! exists, offers it with its change log, and downloads it on request.
//! Checks are scoped to the screen that started them: tearing the screen
//! down cancels the check and nothing is shown afterwards.
//!
//! # Modules
//!
//! - [`build_info`] - Version and build metadata
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, saving, and validation
//! - [`error`] - Error types and result aliases
//! - [`screen`] - Settings screens and their lifecycle
//! - [`ui`] - Notices, confirmations, and terminal output
//! - [`updates`] - Release feed checks, the check flow, and downloads
//!
//! # Example
//!
//! ```
//! use relwatch::ui::MockUI;
//! use relwatch::updates::{handle_result, CheckOutcome, RecordingHandoff, UpdateResult};
//!
//! let mut ui = MockUI::new();
//! let handoff = RecordingHandoff::new();
//!
//! let outcome = handle_result(UpdateResult::NoNewUpdate, &|| true, &mut ui, &handoff);
//! assert_eq!(outcome, CheckOutcome::UpToDate);
//! assert!(ui.has_transient("No new updates available"));
//! ```
//!
//! For the full asynchronous flow, see the integration tests.

pub mod build_info;
pub mod cli;
pub mod config;
pub mod error;
pub mod screen;
pub mod ui;
pub mod updates;

pub use error::{RelwatchError, Result};
