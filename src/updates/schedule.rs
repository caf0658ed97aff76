//! Periodic background checks.

use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};

use crate::config::UpdatesConfig;

/// How often automatic checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoCheckSchedule {
    interval: Duration,
}

impl AutoCheckSchedule {
    /// Run a check every `interval`. Zero is bumped to one second.
    pub fn every(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_secs(1)),
        }
    }

    /// Schedule from config; `None` when automatic checks are off.
    pub fn from_config(updates: &UpdatesConfig) -> Option<Self> {
        if !updates.enabled || !updates.automatic {
            return None;
        }
        Some(Self::hourly(updates.interval_hours))
    }

    /// Run a check every `hours` hours.
    pub fn hourly(hours: u64) -> Self {
        Self::every(Duration::from_secs(hours.saturating_mul(3600)))
    }

    /// Time between checks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// A ticker whose first tick fires immediately.
    ///
    /// Missed ticks are delayed rather than bursted, so a long prompt
    /// does not cause back-to-back checks.
    pub fn ticker(&self) -> Interval {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    }
}
