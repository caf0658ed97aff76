//! Release metadata and check results.

use serde::{Deserialize, Serialize};

use super::version::{is_newer_version, normalize_version};
use super::CheckError;

/// A published release of the watched application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Normalized version (digits and dots only).
    pub version: String,
    /// Release notes.
    pub change_log: String,
    /// Where the release artifact can be downloaded.
    pub download_link: String,
}

/// Outcome of a successful update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// A newer release exists.
    NewUpdate { release: Release },
    /// The installed version is current.
    NoNewUpdate,
}

impl UpdateResult {
    /// Classify `release` against the installed version.
    pub fn for_release(release: Release, current_version: &str) -> Self {
        if is_newer_version(&release.version, current_version) {
            UpdateResult::NewUpdate { release }
        } else {
            UpdateResult::NoNewUpdate
        }
    }
}

/// The subset of the GitHub release object relwatch reads.
#[derive(Debug, Deserialize)]
struct GithubRelease {
    tag_name: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    assets: Vec<GithubAsset>,
}

#[derive(Debug, Deserialize)]
struct GithubAsset {
    browser_download_url: String,
}

impl Release {
    /// Parse a `releases/latest` response body.
    ///
    /// The download link is the first asset, falling back to the release page.
    pub fn from_github_json(json: &str) -> Result<Self, CheckError> {
        let raw: GithubRelease =
            serde_json::from_str(json).map_err(|e| CheckError::Parse(e.to_string()))?;

        let tag = raw
            .tag_name
            .ok_or(CheckError::MissingField("tag_name"))?;

        let download_link = raw
            .assets
            .into_iter()
            .next()
            .map(|asset| asset.browser_download_url)
            .or(raw.html_url)
            .ok_or(CheckError::MissingField("assets"))?;

        Ok(Self {
            version: normalize_version(&tag),
            change_log: raw.body.unwrap_or_default(),
            download_link,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATEST: &str = r#"{
        "tag_name": "v0.8.4",
        "html_url": "https://github.com/acme/widget/releases/tag/v0.8.4",
        "body": "* Fixed crash on startup\n* Faster library refresh",
        "assets": [
            {"name": "widget-v0.8.4.apk", "browser_download_url": "https://github.com/acme/widget/releases/download/v0.8.4/widget-v0.8.4.apk"},
            {"name": "widget-v0.8.4.sha256", "browser_download_url": "https://example.com/other"}
        ]
    }"#;

    #[test]
    fn parses_release_fields() {
        let release = Release::from_github_json(LATEST).unwrap();
        assert_eq!(release.version, "0.8.4");
        assert!(release.change_log.contains("Fixed crash"));
        assert!(release.download_link.ends_with("widget-v0.8.4.apk"));
    }

    #[test]
    fn falls_back_to_release_page_without_assets() {
        let json = r#"{"tag_name": "v1.0.0", "html_url": "https://example.com/r/1", "assets": []}"#;
        let release = Release::from_github_json(json).unwrap();
        assert_eq!(release.download_link, "https://example.com/r/1");
        assert_eq!(release.change_log, "");
    }

    #[test]
    fn missing_tag_is_an_error() {
        let json = r#"{"body": "notes", "assets": []}"#;
        let err = Release::from_github_json(json).unwrap_err();
        assert!(matches!(err, CheckError::MissingField("tag_name")));
    }

    #[test]
    fn missing_link_is_an_error() {
        let json = r#"{"tag_name": "v1.0.0"}"#;
        let err = Release::from_github_json(json).unwrap_err();
        assert!(matches!(err, CheckError::MissingField("assets")));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = Release::from_github_json("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, CheckError::Parse(_)));
    }

    #[test]
    fn newer_release_is_new_update() {
        let release = Release::from_github_json(LATEST).unwrap();
        let result = UpdateResult::for_release(release.clone(), "0.8.3");
        assert_eq!(result, UpdateResult::NewUpdate { release });
    }

    #[test]
    fn same_release_is_no_new_update() {
        let release = Release::from_github_json(LATEST).unwrap();
        assert_eq!(
            UpdateResult::for_release(release, "0.8.4"),
            UpdateResult::NoNewUpdate
        );
    }
}
