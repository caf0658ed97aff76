//! Configuration schema definitions for relwatch.
//!
//! This module contains all the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelwatchConfig {
    /// The application whose releases are watched.
    pub app: AppConfig,

    /// Where releases are published.
    pub feed: FeedConfig,

    /// Update checking behavior.
    pub updates: UpdatesConfig,

    /// Where confirmed downloads are written.
    pub download: DownloadConfig,
}

/// The application being watched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name.
    pub name: String,

    /// Installed version. Defaults to the running binary's version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "relwatch".to_string(),
            version: None,
        }
    }
}

/// GitHub release feed location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Repository owner.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Base URL of the GitHub API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            owner: "relwatch".to_string(),
            repo: "relwatch".to_string(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FeedConfig {
    /// URL of the latest release endpoint.
    pub fn latest_release_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

/// Update checking settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatesConfig {
    /// Whether the updater is available at all.
    pub enabled: bool,

    /// Check for updates periodically (`relwatch watch`).
    pub automatic: bool,

    /// Hours between automatic checks.
    #[serde(default = "default_interval_hours")]
    pub interval_hours: u64,
}

impl Default for UpdatesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            automatic: false,
            interval_hours: default_interval_hours(),
        }
    }
}

/// Download settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Download directory. Defaults to `<downloads>/relwatch`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl DownloadConfig {
    /// Resolve the download directory.
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("relwatch")
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_interval_hours() -> u64 {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = RelwatchConfig::default();
        assert_eq!(config.feed.api_url, "https://api.github.com");
        assert_eq!(config.feed.timeout_secs, 10);
        assert!(config.updates.enabled);
        assert!(!config.updates.automatic);
        assert_eq!(config.updates.interval_hours, 24);
        assert!(config.app.version.is_none());
    }

    #[test]
    fn parses_partial_yaml() {
        let yaml = r#"
feed:
  owner: inorichi
  repo: tachiyomi
updates:
  automatic: true
"#;
        let config: RelwatchConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.feed.owner, "inorichi");
        assert_eq!(config.feed.repo, "tachiyomi");
        assert_eq!(config.feed.api_url, "https://api.github.com");
        assert!(config.updates.automatic);
        assert!(config.updates.enabled);
        assert_eq!(config.updates.interval_hours, 24);
    }

    #[test]
    fn latest_release_url_joins_parts() {
        let feed = FeedConfig {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
            api_url: "http://127.0.0.1:9000/".to_string(),
            timeout_secs: 5,
        };
        assert_eq!(
            feed.latest_release_url(),
            "http://127.0.0.1:9000/repos/acme/widget/releases/latest"
        );
    }

    #[test]
    fn explicit_download_dir_wins() {
        let download = DownloadConfig {
            dir: Some(PathBuf::from("/tmp/dl")),
        };
        assert_eq!(download.resolved_dir(), PathBuf::from("/tmp/dl"));
    }

    #[test]
    fn default_download_dir_ends_with_app_dir() {
        assert!(DownloadConfig::default().resolved_dir().ends_with("relwatch"));
    }

    #[test]
    fn serialization_skips_unset_version() {
        let yaml = serde_yaml::to_string(&RelwatchConfig::default()).unwrap();
        assert!(!yaml.contains("version"));
        assert!(yaml.contains("interval_hours"));
    }
}
