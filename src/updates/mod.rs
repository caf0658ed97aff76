//! Update checking against a GitHub release feed.
//!
//! This module provides:
//! - Release feed parsing and version comparison
//! - The [`UpdateChecker`] seam and its GitHub implementation
//! - The cancellable [`UpdateCheckFlow`] that drives user-visible outcomes
//! - Download handoff for confirmed updates
//! - Periodic background checks

pub mod checker;
pub mod download;
pub mod flow;
pub mod release;
pub mod schedule;
pub mod version;

pub use checker::{CheckError, GithubUpdateChecker, UpdateChecker};
pub use download::{DownloadHandoff, HttpDownloader, RecordingHandoff};
pub use flow::{handle_result, CheckCompletion, CheckOutcome, SessionId, UpdateCheckFlow};
pub use release::{Release, UpdateResult};
pub use schedule::AutoCheckSchedule;
pub use version::{is_newer_version, normalize_version, VERSION};
