//! The update check flow.
//!
//! A flow runs at most one check at a time on behalf of a screen. The
//! check itself runs on a tokio task; its completion is sent back over a
//! channel and applied by the owner through [`UpdateCheckFlow::resolve`],
//! so every dialog and notice is shown from the owning context.
//!
//! ```text
//! Idle --check_for_update--> Checking --resolve--> Idle
//!                               |
//!                               +--cancel / screen destroyed--> Idle
//! ```

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::screen::ScreenLifecycle;
use crate::ui::{Confirmation, Notifier};

use super::checker::{CheckError, UpdateChecker};
use super::download::DownloadHandoff;
use super::release::UpdateResult;

/// Notice shown when a check starts.
pub const LOOKING_FOR_UPDATES: &str = "Looking for updates...";
/// Notice shown when the installed version is current.
pub const NO_NEW_UPDATES: &str = "No new updates available";
/// Title of the download confirmation.
pub const UPDATE_TITLE: &str = "New version available!";
/// Accept label of the download confirmation.
pub const UPDATE_CONFIRM: &str = "Download";
/// Decline label of the download confirmation.
pub const UPDATE_IGNORE: &str = "Ignore";
/// Key of the download confirmation.
pub const DOWNLOAD_PROMPT_KEY: &str = "update_download";

/// Identifies one check session of a flow.
pub type SessionId = u64;

/// Result of a check, tagged with the session that produced it.
#[derive(Debug)]
pub struct CheckCompletion {
    /// Session that ran the check.
    pub session: SessionId,
    /// What the checker returned.
    pub outcome: Result<UpdateResult, CheckError>,
}

/// What the flow did with a resolved check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The user accepted and the link went to the download handoff.
    DownloadStarted { url: String },
    /// The user dismissed the update.
    Declined,
    /// No newer release.
    UpToDate,
    /// The screen was no longer active; nothing was shown.
    Suppressed,
    /// The check failed; the error was logged.
    Failed,
}

/// The in-flight check.
#[derive(Debug)]
struct CheckSession {
    id: SessionId,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl CheckSession {
    fn cancel(self) {
        self.token.cancel();
        self.handle.abort();
    }
}

/// Runs update checks for one screen, one at a time.
pub struct UpdateCheckFlow {
    checker: Arc<dyn UpdateChecker>,
    session: Option<CheckSession>,
    next_id: SessionId,
    completions_tx: mpsc::UnboundedSender<CheckCompletion>,
    completions_rx: mpsc::UnboundedReceiver<CheckCompletion>,
}

impl UpdateCheckFlow {
    /// Create an idle flow backed by `checker`.
    pub fn new(checker: Arc<dyn UpdateChecker>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            checker,
            session: None,
            next_id: 1,
            completions_tx,
            completions_rx,
        }
    }

    /// Whether a check is in flight.
    pub fn is_checking(&self) -> bool {
        self.session.is_some()
    }

    /// Id of the in-flight check, if any.
    pub fn active_session(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Start a check on behalf of `host`.
    ///
    /// Does nothing and returns `None` unless `host` is active. Otherwise
    /// shows the "looking" notice, cancels any previous check, and spawns
    /// the new one scoped to the host's until-destroyed token. Must be
    /// called from within a tokio runtime.
    pub fn check_for_update(
        &mut self,
        host: &ScreenLifecycle,
        ui: &mut dyn Notifier,
    ) -> Option<SessionId> {
        if !host.is_active() {
            tracing::debug!("Ignoring update check request from inactive screen");
            return None;
        }

        ui.show_transient_message(LOOKING_FOR_UPDATES);
        self.cancel();

        let id = self.next_id;
        self.next_id += 1;

        let token = host.until_destroy().child_token();
        let task_token = token.clone();
        let checker = Arc::clone(&self.checker);
        let tx = self.completions_tx.clone();

        let handle = tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = task_token.cancelled() => {
                    tracing::debug!("Update check {} cancelled", id);
                    return;
                }
                outcome = checker.check() => outcome,
            };

            if task_token.is_cancelled() {
                return;
            }
            // The receiver lives as long as the flow.
            let _ = tx.send(CheckCompletion {
                session: id,
                outcome,
            });
        });

        tracing::debug!("Started update check {}", id);
        self.session = Some(CheckSession { id, token, handle });
        Some(id)
    }

    /// Cancel the in-flight check, if any. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!("Cancelling update check {}", session.id);
            session.cancel();
        }
    }

    /// Wait for the in-flight check to report back.
    ///
    /// Returns `None` immediately when idle, and `None` if the check is
    /// cancelled through its host while waiting.
    pub async fn next_completion(&mut self) -> Option<CheckCompletion> {
        let token = self.session.as_ref()?.token.clone();

        let received = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            completion = self.completions_rx.recv() => completion,
        };

        if received.is_none() {
            self.cancel();
        }
        received
    }

    /// Apply a completion on the owning context.
    ///
    /// Completions from cancelled or superseded sessions are dropped and
    /// yield `None`. Otherwise the session is cleared and the result is
    /// handled against `host`'s current activity.
    pub fn resolve(
        &mut self,
        completion: CheckCompletion,
        host: &ScreenLifecycle,
        ui: &mut dyn Notifier,
        handoff: &dyn DownloadHandoff,
    ) -> Option<CheckOutcome> {
        let current = self
            .session
            .as_ref()
            .filter(|s| s.id == completion.session && !s.token.is_cancelled());

        if current.is_none() {
            tracing::debug!("Dropping stale result of update check {}", completion.session);
            return None;
        }
        self.session = None;

        match completion.outcome {
            Ok(result) => Some(handle_result(result, &|| host.is_active(), ui, handoff)),
            Err(e) => {
                tracing::error!("Update check failed: {}", e);
                Some(CheckOutcome::Failed)
            }
        }
    }

    /// Wait for the in-flight check and resolve it.
    ///
    /// Returns `None` when idle or when the check was cancelled.
    pub async fn run_to_completion(
        &mut self,
        host: &ScreenLifecycle,
        ui: &mut dyn Notifier,
        handoff: &dyn DownloadHandoff,
    ) -> Option<CheckOutcome> {
        while self.session.is_some() {
            let completion = self.next_completion().await?;
            if let Some(outcome) = self.resolve(completion, host, ui, handoff) {
                return Some(outcome);
            }
        }
        None
    }
}

impl Drop for UpdateCheckFlow {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// React to a resolved check.
///
/// Nothing is shown unless `is_active` holds. A new release prompts for
/// download with its change log; accepting hands the link to `handoff`
/// exactly once.
pub fn handle_result(
    result: UpdateResult,
    is_active: &dyn Fn() -> bool,
    ui: &mut dyn Notifier,
    handoff: &dyn DownloadHandoff,
) -> CheckOutcome {
    if !is_active() {
        tracing::debug!("Screen inactive, suppressing update check result");
        return CheckOutcome::Suppressed;
    }

    match result {
        UpdateResult::NewUpdate { release } => {
            tracing::info!("Version {} is available", release.version);

            let confirmation = Confirmation::new(
                DOWNLOAD_PROMPT_KEY,
                UPDATE_TITLE,
                release.change_log.as_str(),
                UPDATE_CONFIRM,
                UPDATE_IGNORE,
            );

            match ui.show_confirmation(&confirmation) {
                Ok(true) => {
                    handoff.start_download(&release.download_link);
                    CheckOutcome::DownloadStarted {
                        url: release.download_link,
                    }
                }
                Ok(false) => CheckOutcome::Declined,
                Err(e) => {
                    tracing::warn!("Update prompt failed: {}", e);
                    CheckOutcome::Declined
                }
            }
        }
        UpdateResult::NoNewUpdate => {
            ui.show_transient_message(NO_NEW_UPDATES);
            CheckOutcome::UpToDate
        }
    }
}
