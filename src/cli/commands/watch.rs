//! Watch command implementation.
//!
//! The `relwatch watch` command keeps the about screen open and checks for
//! updates on a fixed interval until interrupted with Ctrl-C.

use std::time::Duration;

use crate::cli::args::WatchArgs;
use crate::error::Result;
use crate::ui::Notifier;
use crate::updates::{AutoCheckSchedule, HttpDownloader};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The watch command implementation.
pub struct WatchCommand {
    context: CommandContext,
    args: WatchArgs,
}

impl WatchCommand {
    /// Create a new watch command.
    pub fn new(context: CommandContext, args: WatchArgs) -> Self {
        Self { context, args }
    }

    /// Schedule from `--interval`, else from the configured hours.
    pub fn schedule(&self) -> AutoCheckSchedule {
        let updates = &self.context.config().updates;
        match self.args.interval {
            Some(secs) => AutoCheckSchedule::every(Duration::from_secs(secs)),
            None => AutoCheckSchedule::from_config(updates)
                .unwrap_or_else(|| AutoCheckSchedule::hourly(updates.interval_hours)),
        }
    }

    fn reached_limit(&self, checks: u64) -> bool {
        self.args.count.is_some_and(|max| checks >= max)
    }
}

#[async_trait::async_trait(?Send)]
impl Command for WatchCommand {
    async fn execute(&self, ui: &mut dyn Notifier) -> Result<CommandResult> {
        let mut screen = self.context.about_screen()?;
        if !screen.updater_enabled() {
            ui.warning("Update checks are disabled");
            return Ok(CommandResult::failure(2));
        }
        if !screen.automatic_updates() && !self.args.force {
            ui.warning("Automatic updates are off. Run `relwatch auto on` or pass --force.");
            return Ok(CommandResult::failure(2));
        }

        let schedule = self.schedule();
        let downloader = HttpDownloader::new(self.context.config().download.resolved_dir())?
            .with_progress(ui.output_mode().shows_progress());

        tracing::info!("Checking for updates every {:?}", schedule.interval());
        screen.open();

        let mut ticker = schedule.ticker();
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        let mut checks = 0u64;
        while !self.reached_limit(checks) {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = ticker.tick() => {}
            }

            checks += 1;
            screen.check_version(ui);

            let interrupted = tokio::select! {
                biased;
                _ = &mut shutdown => true,
                outcome = screen.await_result(ui, &downloader) => {
                    tracing::debug!("Check {} finished with {:?}", checks, outcome);
                    false
                }
            };
            if interrupted {
                break;
            }
        }

        screen.teardown();
        tracing::info!("Stopped watching after {} checks", checks);

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
