//! Running player statistics
//!
//! Persisted under `game_stats` in the shape
//! `{played, wins, streak, maxStreak, didWin, gameCompleted, winPercent}`.
//! Fields missing from an older record default to zero/false.

use crate::error::StoreError;
use crate::store::{Storage, keys, read_json_or_discard, write_json};
use serde::{Deserialize, Serialize};

/// Aggregate counters across every completed day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub played: u32,
    pub wins: u32,
    /// Consecutive wins ending with the latest completed game
    pub streak: u32,
    pub max_streak: u32,
    #[serde(rename = "didWin")]
    pub last_outcome_win: bool,
    #[serde(rename = "gameCompleted")]
    pub completed_today: bool,
    pub win_percent: u32,
}

impl Stats {
    /// Fold one finished game into the counters
    ///
    /// Any win extends the streak, even after skipped days; any loss resets
    /// it. The caller guarantees at most one call per day.
    ///
    /// # Examples
    /// ```
    /// use daily_word::game::Stats;
    ///
    /// let stats = Stats::default().record_outcome(true);
    /// assert_eq!((stats.played, stats.wins, stats.streak, stats.max_streak), (1, 1, 1, 1));
    /// assert_eq!(stats.win_percent, 100);
    /// ```
    #[must_use]
    pub fn record_outcome(self, won: bool) -> Self {
        let played = self.played + 1;
        let (wins, streak) = if won {
            (self.wins + 1, self.streak + 1)
        } else {
            (self.wins, 0)
        };
        Self {
            played,
            wins,
            streak,
            max_streak: self.max_streak.max(streak),
            last_outcome_win: won,
            completed_today: true,
            win_percent: win_percent(wins, played),
        }
    }

    /// Load from the gateway; missing or corrupt data yields zeroed stats
    #[must_use]
    pub fn load(store: &impl Storage) -> Self {
        let mut stats: Self = read_json_or_discard(store, keys::GAME_STATS).unwrap_or_default();
        // Keep the invariants even if the stored record was hand-edited
        stats.wins = stats.wins.min(stats.played);
        stats.max_streak = stats.max_streak.max(stats.streak);
        stats.win_percent = win_percent(stats.wins, stats.played);
        stats
    }

    /// Write to the gateway
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails.
    pub fn save(&self, store: &mut impl Storage) -> Result<(), StoreError> {
        write_json(store, keys::GAME_STATS, self)
    }
}

/// `round(100 * wins / played)`, zero before the first game
#[must_use]
pub fn win_percent(wins: u32, played: u32) -> u32 {
    if played == 0 {
        return 0;
    }
    (f64::from(wins) * 100.0 / f64::from(played)).round() as u32
}
