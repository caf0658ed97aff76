//! Release feed checking.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::config::{FeedConfig, RelwatchConfig};

use super::release::{Release, UpdateResult};
use super::version::VERSION;

/// Why an update check failed.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The feed answered with a non-success status.
    #[error("Release feed returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not a release object.
    #[error("Could not parse release feed: {0}")]
    Parse(String),

    /// The release object lacked a required field.
    #[error("Release feed response is missing `{0}`")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for CheckError {
    fn from(e: reqwest::Error) -> Self {
        CheckError::Network(e.to_string())
    }
}

/// Performs the remote check for a newer release.
///
/// Implementations must be cancel-safe: the caller may drop the future
/// at any await point.
#[async_trait]
pub trait UpdateChecker: Send + Sync {
    /// Check the release feed once.
    async fn check(&self) -> Result<UpdateResult, CheckError>;
}

/// Checks the `releases/latest` endpoint of a GitHub repository.
#[derive(Debug, Clone)]
pub struct GithubUpdateChecker {
    client: reqwest::Client,
    url: String,
    current_version: String,
}

impl GithubUpdateChecker {
    /// Create a checker for `feed`, comparing against `current_version`.
    pub fn new(feed: &FeedConfig, current_version: impl Into<String>) -> Result<Self, CheckError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("relwatch/{}", VERSION))
            .timeout(Duration::from_secs(feed.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: feed.latest_release_url(),
            current_version: current_version.into(),
        })
    }

    /// Create a checker from the full configuration.
    ///
    /// The installed version is `app.version` when set, else this binary's.
    pub fn from_config(config: &RelwatchConfig) -> Result<Self, CheckError> {
        let current = config
            .app
            .version
            .clone()
            .unwrap_or_else(|| VERSION.to_string());
        Self::new(&config.feed, current)
    }

    /// The endpoint being polled.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The version compared against.
    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Fetch and parse the latest release.
    pub async fn fetch_latest(&self) -> Result<Release, CheckError> {
        tracing::debug!("Fetching latest release from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Release::from_github_json(&body)
    }
}

#[async_trait]
impl UpdateChecker for GithubUpdateChecker {
    async fn check(&self) -> Result<UpdateResult, CheckError> {
        let release = self.fetch_latest().await?;
        tracing::debug!(
            "Latest release is {} (installed {})",
            release.version,
            self.current_version
        );
        Ok(UpdateResult::for_release(release, &self.current_version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const LATEST: &str = r#"{
        "tag_name": "v2.1.0",
        "body": "Bug fixes",
        "assets": [{"browser_download_url": "https://example.com/widget-2.1.0.tar.gz"}]
    }"#;

    fn feed_for(server: &MockServer) -> FeedConfig {
        FeedConfig {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
            api_url: server.base_url(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn newer_tag_is_new_update() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/acme/widget/releases/latest");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(LATEST);
            })
            .await;

        let checker = GithubUpdateChecker::new(&feed_for(&server), "2.0.3").unwrap();
        let result = checker.check().await.unwrap();

        match result {
            UpdateResult::NewUpdate { release } => {
                assert_eq!(release.version, "2.1.0");
                assert_eq!(release.change_log, "Bug fixes");
                assert_eq!(
                    release.download_link,
                    "https://example.com/widget-2.1.0.tar.gz"
                );
            }
            other => panic!("expected NewUpdate, got {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn same_tag_is_no_new_update() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/acme/widget/releases/latest");
                then.status(200).body(LATEST);
            })
            .await;

        let checker = GithubUpdateChecker::new(&feed_for(&server), "2.1.0").unwrap();
        assert_eq!(checker.check().await.unwrap(), UpdateResult::NoNewUpdate);
    }

    #[tokio::test]
    async fn sends_user_agent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/repos/acme/widget/releases/latest")
                    .header("user-agent", format!("relwatch/{}", VERSION));
                then.status(200).body(LATEST);
            })
            .await;

        let checker = GithubUpdateChecker::new(&feed_for(&server), "1.0.0").unwrap();
        checker.check().await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_error_is_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/acme/widget/releases/latest");
                then.status(403).body("rate limited");
            })
            .await;

        let checker = GithubUpdateChecker::new(&feed_for(&server), "1.0.0").unwrap();
        let err = checker.check().await.unwrap_err();
        assert!(matches!(err, CheckError::Status { status: 403 }));
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/acme/widget/releases/latest");
                then.status(200).body("not json");
            })
            .await;

        let checker = GithubUpdateChecker::new(&feed_for(&server), "1.0.0").unwrap();
        assert!(matches!(
            checker.check().await.unwrap_err(),
            CheckError::Parse(_)
        ));
    }

    #[tokio::test]
    async fn unreachable_feed_is_network_error() {
        let feed = FeedConfig {
            owner: "acme".to_string(),
            repo: "widget".to_string(),
            api_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 2,
        };
        let checker = GithubUpdateChecker::new(&feed, "1.0.0").unwrap();
        assert!(matches!(
            checker.check().await.unwrap_err(),
            CheckError::Network(_)
        ));
    }

    #[test]
    fn from_config_prefers_configured_version() {
        let mut config = RelwatchConfig::default();
        config.app.version = Some("0.0.1".to_string());
        let checker = GithubUpdateChecker::from_config(&config).unwrap();
        assert_eq!(checker.current_version(), "0.0.1");
        assert!(checker.url().ends_with("/releases/latest"));
    }

    #[test]
    fn from_config_defaults_to_own_version() {
        let checker = GithubUpdateChecker::from_config(&RelwatchConfig::default()).unwrap();
        assert_eq!(checker.current_version(), VERSION);
    }
}
