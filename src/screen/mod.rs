//! Settings screens and their lifecycle.
//!
//! A screen's view is created, attached, detached, and destroyed. Work
//! started on behalf of a screen is scoped to its "until destroyed"
//! cancellation token, so destroying the view cancels it.
//!
//! - [`ScreenLifecycle`] tracks the state and owns the token
//! - [`Screen`] is implemented by concrete settings screens
//! - [`about::AboutScreen`] is the version/update screen

pub mod about;

pub use about::AboutScreen;

use tokio_util::sync::CancellationToken;

/// Lifecycle state of a screen's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// View exists but is not on screen.
    Detached,
    /// View is on screen and may show dialogs.
    Attached,
    /// View was torn down.
    Destroyed,
}

/// Tracks a screen's lifecycle and the work scoped to it.
#[derive(Debug)]
pub struct ScreenLifecycle {
    state: ScreenState,
    until_destroy: CancellationToken,
}

impl Default for ScreenLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenLifecycle {
    /// A freshly created, detached view.
    pub fn new() -> Self {
        Self {
            state: ScreenState::Detached,
            until_destroy: CancellationToken::new(),
        }
    }

    /// (Re)create the view, renewing the scope if a previous view was destroyed.
    pub fn create_view(&mut self) {
        if self.until_destroy.is_cancelled() {
            self.until_destroy = CancellationToken::new();
        }
        self.state = ScreenState::Detached;
    }

    /// Put the view on screen.
    pub fn attach(&mut self) {
        if self.state == ScreenState::Destroyed {
            self.create_view();
        }
        self.state = ScreenState::Attached;
    }

    /// Take the view off screen without destroying it.
    pub fn detach(&mut self) {
        if self.state == ScreenState::Attached {
            self.state = ScreenState::Detached;
        }
    }

    /// Destroy the view and cancel everything scoped to it.
    pub fn destroy_view(&mut self) {
        self.until_destroy.cancel();
        self.state = ScreenState::Destroyed;
    }

    /// Current state.
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Whether the screen may show user-visible effects.
    pub fn is_active(&self) -> bool {
        self.state == ScreenState::Attached
    }

    /// Token cancelled when the view is destroyed.
    pub fn until_destroy(&self) -> &CancellationToken {
        &self.until_destroy
    }
}

/// A single entry on a settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preference {
    /// On/off setting persisted under `key`.
    Switch {
        key: String,
        title: String,
        summary: String,
        value: bool,
    },
    /// Read-only row, optionally clickable.
    Info {
        key: String,
        title: String,
        summary: String,
        clickable: bool,
    },
}

impl Preference {
    /// Title shown for the entry.
    pub fn title(&self) -> &str {
        match self {
            Preference::Switch { title, .. } | Preference::Info { title, .. } => title,
        }
    }

    /// Stable key of the entry.
    pub fn key(&self) -> &str {
        match self {
            Preference::Switch { key, .. } | Preference::Info { key, .. } => key,
        }
    }

    /// Text shown to the right of the title.
    pub fn display_value(&self) -> String {
        match self {
            Preference::Switch { summary, value, .. } => {
                format!("[{}] {}", if *value { "on" } else { "off" }, summary)
            }
            Preference::Info { summary, .. } => summary.clone(),
        }
    }
}

/// A settings screen.
pub trait Screen {
    /// Screen title.
    fn title(&self) -> &str;

    /// Visible entries, in display order.
    fn preferences(&self) -> Vec<Preference>;

    /// The screen's lifecycle.
    fn lifecycle(&self) -> &ScreenLifecycle;

    /// Render all visible entries as (title, value) rows.
    fn rows(&self) -> Vec<(String, String)> {
        self.preferences()
            .iter()
            .map(|p| (p.title().to_string(), p.display_value()))
            .collect()
    }
}
