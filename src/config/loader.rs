//! Configuration file discovery, loading, and saving.

use crate::config::schema::RelwatchConfig;
use crate::error::{RelwatchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config location: `~/.relwatch/config.yml`.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("~"))
        .join(".relwatch")
        .join("config.yml")
}

/// Load configuration from `path`.
///
/// A missing file yields the defaults. An empty file is treated the same way.
pub fn load_config(path: &Path) -> Result<RelwatchConfig> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(RelwatchConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(RelwatchConfig::default());
    }

    let config: RelwatchConfig =
        serde_yaml::from_str(&content).map_err(|e| RelwatchError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save configuration to `path` using atomic write.
pub fn save_config(config: &RelwatchConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content =
        serde_yaml::to_string(config).map_err(|e| RelwatchError::ConfigValidationError {
            message: format!("Failed to serialize config: {}", e),
        })?;

    // Atomic write: write to temp file, then rename
    let temp_path = path.with_extension("yml.tmp");
    fs::write(&temp_path, &content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
