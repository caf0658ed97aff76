//! Configuration validation rules.
//!
//! - Feed owner and repo must be non-empty
//! - The feed API URL must be http(s)
//! - Intervals and timeouts must be positive

use crate::config::schema::RelwatchConfig;
use crate::error::{RelwatchError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &RelwatchConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.feed.owner.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-owner",
            "feed.owner must not be empty",
        ));
    }

    if config.feed.repo.trim().is_empty() {
        errors.push(ValidationError::new("empty-repo", "feed.repo must not be empty"));
    }

    let api_url = config.feed.api_url.as_str();
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        errors.push(ValidationError::new(
            "invalid-api-url",
            format!("feed.api_url '{}' must be an http(s) URL", api_url),
        ));
    }

    if config.feed.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "feed.timeout_secs must be greater than zero",
        ));
    }

    if config.updates.interval_hours == 0 {
        errors.push(ValidationError::new(
            "zero-interval",
            "updates.interval_hours must be greater than zero",
        ));
    }

    errors
}

/// Validate a configuration, returning the first batch of errors as one.
pub fn validate(config: &RelwatchConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(RelwatchError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
