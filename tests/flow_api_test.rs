//! Integration tests for the update check flow public API.

use async_trait::async_trait;
use relwatch::build_info::BuildInfo;
use relwatch::config::RelwatchConfig;
use relwatch::screen::{AboutScreen, Screen, ScreenLifecycle, ScreenState};
use relwatch::ui::MockUI;
use relwatch::updates::flow::{DOWNLOAD_PROMPT_KEY, LOOKING_FOR_UPDATES, NO_NEW_UPDATES};
use relwatch::updates::{
    CheckError, CheckOutcome, RecordingHandoff, Release, UpdateCheckFlow, UpdateChecker,
    UpdateResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Notify;

/// Checker that holds every answer until the test lets it go.
struct HeldChecker {
    result: UpdateResult,
    release: Notify,
    started: AtomicUsize,
}

impl HeldChecker {
    fn new(result: UpdateResult) -> Arc<Self> {
        Arc::new(Self {
            result,
            release: Notify::new(),
            started: AtomicUsize::new(0),
        })
    }

    async fn wait_started(&self, calls: usize) {
        for _ in 0..1000 {
            if self.started.load(Ordering::SeqCst) >= calls {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("checker never started {} checks", calls);
    }
}

#[async_trait]
impl UpdateChecker for HeldChecker {
    async fn check(&self) -> Result<UpdateResult, CheckError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.release.notified().await;
        Ok(self.result.clone())
    }
}

fn new_release() -> UpdateResult {
    UpdateResult::NewUpdate {
        release: Release {
            version: "3.0.0".to_string(),
            change_log: "Rewritten downloader".to_string(),
            download_link: "https://example.com/widget-3.0.0.tar.gz".to_string(),
        },
    }
}

fn build() -> BuildInfo {
    BuildInfo {
        version_name: "2.0.0".to_string(),
        debug: false,
        commit_count: None,
        build_time: None,
        include_updater: true,
    }
}

#[tokio::test]
async fn released_check_shows_offer() {
    let checker = HeldChecker::new(new_release());
    let mut flow = UpdateCheckFlow::new(checker.clone());
    let mut host = ScreenLifecycle::new();
    host.attach();
    let mut ui = MockUI::new();
    ui.set_confirmation_response(DOWNLOAD_PROMPT_KEY, true);
    let handoff = RecordingHandoff::new();

    flow.check_for_update(&host, &mut ui);
    checker.wait_started(1).await;
    checker.release.notify_one();

    let outcome = flow.run_to_completion(&host, &mut ui, &handoff).await;

    assert_eq!(
        outcome,
        Some(CheckOutcome::DownloadStarted {
            url: "https://example.com/widget-3.0.0.tar.gz".to_string()
        })
    );
    assert_eq!(ui.transients(), [LOOKING_FOR_UPDATES]);
    assert!(ui.confirmations()[0].body.contains("Rewritten downloader"));
}

#[tokio::test]
async fn destroyed_screen_never_shows_late_result() {
    let checker = HeldChecker::new(new_release());
    let mut flow = UpdateCheckFlow::new(checker.clone());
    let mut host = ScreenLifecycle::new();
    host.attach();
    let mut ui = MockUI::new();
    let handoff = RecordingHandoff::new();

    flow.check_for_update(&host, &mut ui);
    checker.wait_started(1).await;
    host.destroy_view();
    checker.release.notify_waiters();

    assert_eq!(flow.run_to_completion(&host, &mut ui, &handoff).await, None);
    assert!(ui.confirmations().is_empty());
    assert!(handoff.urls().is_empty());
}

#[tokio::test]
async fn about_screen_round_trip() {
    let temp = TempDir::new().unwrap();
    let checker = HeldChecker::new(UpdateResult::NoNewUpdate);
    let mut screen = AboutScreen::new(
        checker.clone(),
        RelwatchConfig::default(),
        temp.path().join("config.yml"),
        build(),
    );
    let mut ui = MockUI::new();
    let handoff = RecordingHandoff::new();

    // Not attached yet: clicking does nothing.
    assert!(screen.check_version(&mut ui).is_none());

    screen.open();
    assert_eq!(screen.lifecycle().state(), ScreenState::Attached);
    assert!(screen.check_version(&mut ui).is_some());
    checker.wait_started(1).await;
    checker.release.notify_one();

    assert_eq!(
        screen.await_result(&mut ui, &handoff).await,
        Some(CheckOutcome::UpToDate)
    );
    assert_eq!(ui.transients(), [LOOKING_FOR_UPDATES, NO_NEW_UPDATES]);

    screen.teardown();
    assert_eq!(screen.lifecycle().state(), ScreenState::Destroyed);
}

#[tokio::test]
async fn detached_screen_suppresses_result() {
    let temp = TempDir::new().unwrap();
    let checker = HeldChecker::new(new_release());
    let mut screen = AboutScreen::new(
        checker.clone(),
        RelwatchConfig::default(),
        temp.path().join("config.yml"),
        build(),
    );
    let mut ui = MockUI::new();
    let handoff = RecordingHandoff::new();

    screen.open();
    screen.check_version(&mut ui);
    checker.wait_started(1).await;
    screen.detach();
    checker.release.notify_one();

    assert_eq!(
        screen.await_result(&mut ui, &handoff).await,
        Some(CheckOutcome::Suppressed)
    );
    assert!(ui.confirmations().is_empty());
}
