//! Shared fixtures for command tests.

use async_trait::async_trait;
use std::sync::Arc;
use tempfile::TempDir;

use crate::build_info::BuildInfo;
use crate::config::RelwatchConfig;
use crate::updates::{CheckError, Release, UpdateChecker, UpdateResult};

use super::dispatcher::CommandContext;

/// Checker that always answers with the same result.
pub struct StubChecker(pub UpdateResult);

#[async_trait]
impl UpdateChecker for StubChecker {
    async fn check(&self) -> Result<UpdateResult, CheckError> {
        Ok(self.0.clone())
    }
}

/// A release build of 1.0.0 with the updater compiled in.
pub fn release_build() -> BuildInfo {
    BuildInfo {
        version_name: "1.0.0".to_string(),
        debug: false,
        commit_count: Some("42".to_string()),
        build_time: Some("2017-06-15T12:30Z".to_string()),
        include_updater: true,
    }
}

/// Context answering every check with `result`, with config under `temp`.
pub fn context_with(result: UpdateResult, temp: &TempDir) -> CommandContext {
    CommandContext::new(RelwatchConfig::default(), temp.path().join("config.yml"))
        .with_build(release_build())
        .with_checker(Arc::new(StubChecker(result)))
}

/// A 2.0.0 release downloadable from `link`.
pub fn newer_release(link: &str) -> UpdateResult {
    UpdateResult::NewUpdate {
        release: Release {
            version: "2.0.0".to_string(),
            change_log: "- Faster checks".to_string(),
            download_link: link.to_string(),
        },
    }
}
