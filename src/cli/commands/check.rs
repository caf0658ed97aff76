//! Check command implementation.
//!
//! The `relwatch check` command runs one update check, offers a newer
//! release for download, and waits for any download it started.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::Notifier;
use crate::updates::{CheckOutcome, HttpDownloader};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn downloader(&self, ui: &dyn Notifier) -> Result<HttpDownloader> {
        let dir = self
            .args
            .download_dir
            .clone()
            .unwrap_or_else(|| self.context.config().download.resolved_dir());
        Ok(HttpDownloader::new(dir)?.with_progress(ui.output_mode().shows_progress()))
    }
}

#[async_trait::async_trait(?Send)]
impl Command for CheckCommand {
    async fn execute(&self, ui: &mut dyn Notifier) -> Result<CommandResult> {
        let mut screen = self.context.about_screen()?;
        if !screen.updater_enabled() {
            ui.warning("Update checks are disabled");
            return Ok(CommandResult::failure(2));
        }

        let downloader = self.downloader(ui)?;
        screen.open();
        screen.check_version(ui);

        let outcome = tokio::select! {
            outcome = screen.await_result(ui, &downloader) => outcome,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, cancelling update check");
                None
            }
        };
        screen.teardown();
        tracing::debug!("Check finished with {:?}", outcome);

        if let Some(CheckOutcome::DownloadStarted { url }) = &outcome {
            tracing::debug!("Waiting for download of {}", url);
        }

        let mut failed = false;
        for result in downloader.wait().await {
            match result {
                Ok(path) => ui.success(&format!("Downloaded to {}", path.display())),
                Err(e) => {
                    ui.error(&e.to_string());
                    failed = true;
                }
            }
        }

        if failed {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::testing::{context_with, newer_release};
    use crate::ui::MockUI;
    use crate::updates::flow::{DOWNLOAD_PROMPT_KEY, LOOKING_FOR_UPDATES, NO_NEW_UPDATES};
    use crate::updates::UpdateResult;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn up_to_date_reports_no_updates() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(
            context_with(UpdateResult::NoNewUpdate, &temp),
            CheckArgs::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).await.unwrap();

        assert!(result.success);
        assert_eq!(ui.transients(), [LOOKING_FOR_UPDATES, NO_NEW_UPDATES]);
    }

    #[tokio::test]
    async fn accepted_update_is_downloaded() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/dl/app-2.0.0.tar.gz");
                then.status(200).body("new-build");
            })
            .await;

        let temp = TempDir::new().unwrap();
        let link = server.url("/dl/app-2.0.0.tar.gz");
        let args = CheckArgs {
            yes: true,
            download_dir: Some(temp.path().join("downloads")),
        };
        let cmd = CheckCommand::new(context_with(newer_release(&link), &temp), args);
        let mut ui = MockUI::new();
        ui.set_confirmation_response(DOWNLOAD_PROMPT_KEY, true);

        let result = cmd.execute(&mut ui).await.unwrap();

        assert!(result.success);
        mock.assert_async().await;
        let written = temp.path().join("downloads").join("app-2.0.0.tar.gz");
        assert_eq!(std::fs::read_to_string(written).unwrap(), "new-build");
        assert!(ui.successes().iter().any(|m| m.contains("Downloaded to")));
    }

    #[tokio::test]
    async fn declined_update_downloads_nothing() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs {
            yes: false,
            download_dir: Some(temp.path().join("downloads")),
        };
        let cmd = CheckCommand::new(
            context_with(newer_release("http://127.0.0.1:9/never"), &temp),
            args,
        );
        let mut ui = MockUI::new();
        ui.set_confirmation_response(DOWNLOAD_PROMPT_KEY, false);

        let result = cmd.execute(&mut ui).await.unwrap();

        assert!(result.success);
        assert_eq!(ui.confirmations().len(), 1);
        assert!(!temp.path().join("downloads").exists());
    }

    #[tokio::test]
    async fn failed_download_fails_command() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/dl/gone.tar.gz");
                then.status(410);
            })
            .await;

        let temp = TempDir::new().unwrap();
        let args = CheckArgs {
            yes: true,
            download_dir: Some(temp.path().to_path_buf()),
        };
        let cmd = CheckCommand::new(
            context_with(newer_release(&server.url("/dl/gone.tar.gz")), &temp),
            args,
        );
        let mut ui = MockUI::new();
        ui.set_confirmation_response(DOWNLOAD_PROMPT_KEY, true);

        let result = cmd.execute(&mut ui).await.unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("410"));
    }

    #[tokio::test]
    async fn disabled_updater_refuses() {
        let temp = TempDir::new().unwrap();
        let mut context = context_with(UpdateResult::NoNewUpdate, &temp);
        let mut build = context.build().clone();
        build.include_updater = false;
        context = context.with_build(build);
        let cmd = CheckCommand::new(context, CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).await.unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.transients().is_empty());
    }
}
