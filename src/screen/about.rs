//! The "About" settings screen.

use std::path::PathBuf;
use std::sync::Arc;

use crate::build_info::BuildInfo;
use crate::config::{save_config, RelwatchConfig};
use crate::error::Result;
use crate::ui::Notifier;
use crate::updates::{CheckOutcome, DownloadHandoff, SessionId, UpdateCheckFlow, UpdateChecker};

use super::{Preference, Screen, ScreenLifecycle};

/// Key of the automatic updates switch.
pub const PREF_AUTOMATIC_UPDATES: &str = "automatic_updates";
/// Key of the version row.
pub const PREF_VERSION: &str = "version";
/// Key of the build time row.
pub const PREF_BUILD_TIME: &str = "build_time";

/// Shows version and build information and checks for updates on request.
pub struct AboutScreen {
    lifecycle: ScreenLifecycle,
    flow: UpdateCheckFlow,
    config: RelwatchConfig,
    config_path: PathBuf,
    build: BuildInfo,
}

impl AboutScreen {
    /// Create the screen. The view starts detached.
    pub fn new(
        checker: Arc<dyn UpdateChecker>,
        config: RelwatchConfig,
        config_path: impl Into<PathBuf>,
        build: BuildInfo,
    ) -> Self {
        Self {
            lifecycle: ScreenLifecycle::new(),
            flow: UpdateCheckFlow::new(checker),
            config,
            config_path: config_path.into(),
            build,
        }
    }

    /// Create the view and put it on screen.
    pub fn open(&mut self) {
        self.lifecycle.create_view();
        self.lifecycle.attach();
    }

    /// Take the view off screen. Results arriving meanwhile are not shown.
    pub fn detach(&mut self) {
        self.lifecycle.detach();
    }

    /// Whether update checks are available in this build and config.
    ///
    /// Development builds never check.
    pub fn updater_enabled(&self) -> bool {
        self.config.updates.enabled && self.build.include_updater && !self.build.debug
    }

    /// Current value of the automatic updates switch.
    pub fn automatic_updates(&self) -> bool {
        self.config.updates.automatic
    }

    /// Config the screen was opened with, including saved changes.
    pub fn config(&self) -> &RelwatchConfig {
        &self.config
    }

    /// Whether a check is in flight.
    pub fn is_checking(&self) -> bool {
        self.flow.is_checking()
    }

    /// Start an update check if the updater is enabled.
    pub fn check_version(&mut self, ui: &mut dyn Notifier) -> Option<SessionId> {
        if !self.updater_enabled() {
            tracing::debug!("Updater disabled, not checking");
            return None;
        }
        self.flow.check_for_update(&self.lifecycle, ui)
    }

    /// React to a click on the entry with `key`.
    pub fn on_preference_click(&mut self, key: &str, ui: &mut dyn Notifier) -> Option<SessionId> {
        match key {
            PREF_VERSION => self.check_version(ui),
            _ => None,
        }
    }

    /// Wait for the in-flight check and show its outcome.
    pub async fn await_result(
        &mut self,
        ui: &mut dyn Notifier,
        handoff: &dyn DownloadHandoff,
    ) -> Option<CheckOutcome> {
        self.flow
            .run_to_completion(&self.lifecycle, ui, handoff)
            .await
    }

    /// Persist the automatic updates switch.
    ///
    /// The switch keeps its old value if the config cannot be saved.
    pub fn set_automatic_updates(&mut self, enabled: bool) -> Result<()> {
        let mut updated = self.config.clone();
        updated.updates.automatic = enabled;
        save_config(&updated, &self.config_path)?;
        self.config = updated;
        tracing::info!(
            "Automatic updates {}",
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    /// Cancel any in-flight check and destroy the view.
    pub fn teardown(&mut self) {
        self.flow.cancel();
        self.lifecycle.destroy_view();
    }
}

impl Screen for AboutScreen {
    fn title(&self) -> &str {
        "About"
    }

    fn preferences(&self) -> Vec<Preference> {
        let mut prefs = Vec::with_capacity(3);

        if self.updater_enabled() {
            prefs.push(Preference::Switch {
                key: PREF_AUTOMATIC_UPDATES.to_string(),
                title: "Check for updates automatically".to_string(),
                summary: format!("Every {} hours", self.config.updates.interval_hours),
                value: self.config.updates.automatic,
            });
        }

        prefs.push(Preference::Info {
            key: PREF_VERSION.to_string(),
            title: "Version".to_string(),
            summary: self.build.version_summary(),
            clickable: self.updater_enabled(),
        });

        prefs.push(Preference::Info {
            key: PREF_BUILD_TIME.to_string(),
            title: "Build time".to_string(),
            summary: self.build.formatted_build_time(),
            clickable: false,
        });

        prefs
    }

    fn lifecycle(&self) -> &ScreenLifecycle {
        &self.lifecycle
    }
}
