//! Game configuration
//!
//! Built from command-line flags in the binary; tests use the defaults and
//! override single fields with the `with_*` setters.

use crate::daily::default_epoch;
use chrono::NaiveDate;
use std::time::Duration;

/// Default number of guesses per day
pub const DEFAULT_ATTEMPTS: usize = 6;

/// How often the application should check for a new day
pub const DEFAULT_ROLLOVER_POLL: Duration = Duration::from_secs(30);

/// How long an invalid-word notice stays visible
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Tunables for a puzzle session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub epoch: NaiveDate,
    pub rollover_poll: Duration,
    pub notice_duration: Duration,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_ATTEMPTS,
            epoch: default_epoch(),
            rollover_poll: DEFAULT_ROLLOVER_POLL,
            notice_duration: DEFAULT_NOTICE_DURATION,
        }
    }

    /// Set the number of guesses; zero is raised to one
    #[must_use]
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_epoch(mut self, epoch: NaiveDate) -> Self {
        self.epoch = epoch;
        self
    }

    #[must_use]
    pub fn with_rollover_poll(mut self, every: Duration) -> Self {
        self.rollover_poll = every;
        self
    }

    #[must_use]
    pub fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Notice lifetime as a calendar delta
    #[must_use]
    pub fn notice_delta(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.notice_duration)
            .unwrap_or_else(|_| chrono::Duration::seconds(2))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
