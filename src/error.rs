//! Error types for relwatch operations.
//!
//! This module defines [`RelwatchError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RelwatchError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RelwatchError::Other`) for unexpected errors
//! - Update check failures use [`CheckError`](crate::updates::CheckError) and
//!   never surface here; the check flow absorbs them

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for relwatch operations.
#[derive(Debug, Error)]
pub enum RelwatchError {
    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Downloading a release asset failed.
    #[error("Download of {url} failed: {message}")]
    DownloadFailed { url: String, message: String },

    /// A prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for relwatch operations.
pub type Result<T> = std::result::Result<T, RelwatchError>;
