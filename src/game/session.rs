//! The daily puzzle session
//!
//! Owns the grid, the keyboard feedback, the outcome and the transient
//! notice, and is the only code that talks to the persistence gateway during
//! play. Every inbound operation is synchronous; persistence is always the
//! last step of an operation that changes state.
//!
//! ```text
//!   InProgress ──win──▶ Won(n)
//!       │
//!       └──last row──▶ Lost
//! ```
//!
//! Terminal outcomes are immutable until the next calendar day; input sent to
//! a finished session is ignored without error.

use super::notice::{Notice, NoticeKind};
use super::stats::Stats;
use crate::config::GameConfig;
use crate::core::{Feedback, Grid, KeyboardState, Row, Word};
use crate::daily::{Clock, DailySelector, format_countdown, until_midnight};
use crate::error::{RestoreError, SessionError};
use crate::store::{
    self, BoardSnapshot, DailyWordRecord, GAME_VERSION, Storage, keys, read_json,
    read_json_or_discard, write_json,
};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use serde::Serialize;

/// Where the day's game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    InProgress,
    /// Solved on the given attempt (1-based)
    Won(usize),
    Lost,
}

impl SessionOutcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of [`PuzzleSession::submit_guess`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Nothing happened: row incomplete or game already over
    Ignored,
    /// Not an acceptable word; no attempt consumed
    Rejected(Word),
    /// Guess scored
    Accepted {
        feedback: Feedback,
        outcome: SessionOutcome,
    },
}

/// One player's puzzle for the current local day
pub struct PuzzleSession<'a, S: Storage, C: Clock> {
    dictionary: &'a Dictionary,
    selector: DailySelector<'a>,
    config: GameConfig,
    store: S,
    clock: C,
    day: NaiveDate,
    secret: Word,
    grid: Grid,
    keyboard: KeyboardState,
    outcome: SessionOutcome,
    notice: Option<Notice>,
    stats: Stats,
}

impl<'a, S: Storage, C: Clock> PuzzleSession<'a, S, C> {
    /// Start today's session, restoring whatever the store holds for today
    ///
    /// Stale, corrupt or version-mismatched state is discarded silently.
    ///
    /// # Errors
    /// Returns `SessionError::EmptyDictionary` if there is no word to pick.
    pub fn open(
        dictionary: &'a Dictionary,
        mut store: S,
        clock: C,
        config: GameConfig,
    ) -> Result<Self, SessionError> {
        if let Err(err) = store::ensure_version(&mut store, GAME_VERSION) {
            log::warn!("Failed to check stored version: {err}");
        }

        let selector = DailySelector::new(dictionary, config.epoch);
        let day = clock.today();
        let secret = selector
            .resolve(&mut store, day)
            .ok_or(SessionError::EmptyDictionary)?;
        let stats = Stats::load(&store);

        let mut session = Self {
            dictionary,
            selector,
            grid: Grid::new(config.max_attempts),
            config,
            store,
            clock,
            day,
            secret,
            keyboard: KeyboardState::new(),
            outcome: SessionOutcome::InProgress,
            notice: None,
            stats,
        };
        session.clear_stale_completion();
        session.restore_from_persistence();
        Ok(session)
    }

    // ---------------------------------------------------------------------
    // Inbound operations
    // ---------------------------------------------------------------------

    /// Type a letter into the current row
    ///
    /// Ignored when the game is over, the row is full, or `ch` is not an
    /// ASCII letter. Returns whether the grid changed.
    pub fn input_letter(&mut self, ch: char) -> bool {
        if self.outcome.is_terminal() || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.grid.push_letter(ch.to_ascii_uppercase())
    }

    /// Erase the last typed letter of the current row
    pub fn delete_letter(&mut self) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        self.grid.pop_letter()
    }

    /// Score the current row
    pub fn submit_guess(&mut self) -> SubmitResult {
        if self.outcome.is_terminal() || !self.grid.current().is_full() {
            return SubmitResult::Ignored;
        }
        let Some(guess) = self.grid.current().word() else {
            return SubmitResult::Ignored;
        };

        // The cached secret may predate a word list change
        if guess != self.secret && !self.dictionary.is_acceptable(&guess) {
            log::debug!("Rejected guess '{guess}'");
            self.raise_notice(NoticeKind::InvalidWord);
            return SubmitResult::Rejected(guess);
        }

        let feedback = Feedback::evaluate(&guess, &self.secret);
        self.grid.apply_to_current(&feedback);
        self.keyboard.fold_row(self.grid.current());
        self.notice = None;

        let attempt = self.grid.current_row() + 1;
        self.outcome = if feedback.is_win() {
            SessionOutcome::Won(attempt)
        } else if self.grid.is_last_row() {
            SessionOutcome::Lost
        } else {
            self.grid.advance();
            SessionOutcome::InProgress
        };

        let snapshot = BoardSnapshot::capture(self.day, &self.grid);
        self.persist(keys::BOARD_STATE, &snapshot);
        if self.outcome.is_terminal() {
            self.complete_day();
        }

        SubmitResult::Accepted {
            feedback,
            outcome: self.outcome,
        }
    }

    /// Reload today's board from the gateway
    ///
    /// Returns whether a snapshot was restored. Stale or malformed snapshots
    /// are deleted and the session keeps a fresh grid; a day that was
    /// already finished stays finished even without its board.
    pub fn restore_from_persistence(&mut self) -> bool {
        let restored = match read_json::<BoardSnapshot>(&self.store, keys::BOARD_STATE) {
            Ok(Some(snapshot)) => match self.restore(snapshot) {
                Ok(()) => true,
                Err(err) => {
                    self.discard_board(&err);
                    false
                }
            },
            Ok(None) => false,
            Err(err) => {
                self.discard_board(&err);
                false
            }
        };

        if !restored && self.played_today() {
            self.outcome = self.recorded_outcome(self.attempts_used());
            log::info!("No board for {}, already played", self.day);
        }
        restored
    }

    /// Rehydrate grid, keyboard and outcome from a snapshot
    ///
    /// # Errors
    /// - `RestoreError::Stale` for a snapshot of another day
    /// - `RestoreError::Shape` for a snapshot that does not fit this game
    pub fn restore(&mut self, snapshot: BoardSnapshot) -> Result<(), RestoreError> {
        let rows = snapshot.into_rows(self.day, self.config.max_attempts)?;
        self.check_rows(&rows)?;

        let grid = Grid::from_rows(rows);
        let evaluated = grid.evaluated_rows().count();
        let winning_row = grid
            .rows()
            .iter()
            .position(|row| row.feedback().is_some_and(|f| f.is_win()));

        self.keyboard = KeyboardState::from_rows(grid.rows());
        self.outcome = match winning_row {
            Some(index) => SessionOutcome::Won(index + 1),
            None if evaluated == grid.rows().len() => SessionOutcome::Lost,
            None if self.played_today() => self.recorded_outcome(evaluated),
            None => SessionOutcome::InProgress,
        };
        self.grid = grid;
        self.notice = None;

        // The board can be ahead of the stats if the process died in between
        if self.outcome.is_terminal() && !self.played_today() {
            self.complete_day();
        }
        log::debug!("Restored board for {} ({evaluated} guesses)", self.day);
        Ok(())
    }

    /// Start a fresh game if the local day has changed
    ///
    /// Compares both the session's day and the persisted `daily_word` day
    /// against today. Safe to call as often as the application likes.
    pub fn rollover_if_new_day(&mut self) -> bool {
        let today = self.clock.today();
        let stored = read_json_or_discard::<DailyWordRecord>(&self.store, keys::DAILY_WORD)
            .map(|record| record.date);

        if self.day == today && stored.is_none_or(|date| date == today) {
            if stored.is_none() {
                // Record vanished mid-day: put today's word back
                let record = DailyWordRecord {
                    date: today,
                    word: self.secret.clone(),
                };
                self.persist(keys::DAILY_WORD, &record);
            }
            return false;
        }

        log::info!("Day rolled over from {} to {today}", self.day);
        let Some(secret) = self.selector.resolve(&mut self.store, today) else {
            return false;
        };
        self.day = today;
        self.secret = secret;
        self.grid = Grid::new(self.config.max_attempts);
        self.keyboard.clear();
        self.outcome = SessionOutcome::InProgress;
        self.notice = None;
        if let Err(err) = self.store.remove(keys::BOARD_STATE) {
            log::warn!("Failed to clear board: {err}");
        }
        self.clear_stale_completion();
        true
    }

    /// Drop the notice once its display time has passed
    pub fn clear_expired_notice(&mut self) -> bool {
        let now = self.clock.now();
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
            return true;
        }
        false
    }

    // ---------------------------------------------------------------------
    // Read-only views
    // ---------------------------------------------------------------------

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn outcome(&self) -> SessionOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.day
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Today's secret; frontends reveal it only after a loss
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Visible notice, if any has not yet expired
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        let now = self.clock.now();
        self.notice.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Number of scored guesses
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.grid.evaluated_rows().count()
    }

    #[must_use]
    pub fn puzzle_number(&self) -> i64 {
        self.selector.puzzle_number(self.day)
    }

    /// `HH:MM:SS` until the next word
    #[must_use]
    pub fn countdown(&self) -> String {
        format_countdown(until_midnight(self.clock.now()))
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    fn raise_notice(&mut self, kind: NoticeKind) {
        let expires_at = self.clock.now() + self.config.notice_delta();
        self.notice = Some(Notice::new(kind, expires_at));
    }

    fn last_played(&self) -> Option<NaiveDate> {
        read_json_or_discard(&self.store, keys::LAST_PLAYED)
    }

    /// Today's outcome is already on record
    fn played_today(&self) -> bool {
        self.last_played() == Some(self.day)
    }

    /// Outcome of a finished day whose board is missing or incomplete
    fn recorded_outcome(&self, evaluated: usize) -> SessionOutcome {
        if self.stats.last_outcome_win {
            SessionOutcome::Won(evaluated.max(1))
        } else {
            SessionOutcome::Lost
        }
    }

    /// Record the terminal outcome once per day
    fn complete_day(&mut self) {
        if self.played_today() {
            log::warn!("Outcome for {} already recorded", self.day);
            return;
        }
        let won = matches!(self.outcome, SessionOutcome::Won(_));
        self.stats = self.stats.record_outcome(won);
        self.save_stats();
        let day = self.day;
        self.persist(keys::LAST_PLAYED, &day);
        log::info!(
            "Puzzle #{} {} after {} guesses",
            self.puzzle_number(),
            if won { "won" } else { "lost" },
            self.attempts_used()
        );
    }

    /// A completion flag left over from an earlier day no longer applies
    fn clear_stale_completion(&mut self) {
        if self.stats.completed_today && self.last_played() != Some(self.day) {
            self.stats.completed_today = false;
            self.save_stats();
        }
    }

    fn save_stats(&mut self) {
        if let Err(err) = self.stats.save(&mut self.store) {
            log::warn!("Failed to persist stats: {err}");
        }
    }

    /// Rows must be evaluated, then at most one partial row, then blanks,
    /// and their verdicts must match today's secret
    fn check_rows(&self, rows: &[Row]) -> Result<(), RestoreError> {
        let mut open = false;
        for row in rows {
            if open {
                if !row.is_blank() {
                    return Err(RestoreError::Shape("letters after the open row".to_string()));
                }
                continue;
            }
            match row.feedback() {
                Some(stored) => {
                    let word = row
                        .word()
                        .ok_or_else(|| RestoreError::Shape("scored row is not a word".to_string()))?;
                    if Feedback::evaluate(&word, &self.secret) != stored {
                        return Err(RestoreError::Shape(
                            "verdicts do not match today's word".to_string(),
                        ));
                    }
                    open = stored.is_win();
                }
                None => {
                    if row.is_full() || row.cells().iter().any(|c| c.state.is_some()) {
                        return Err(RestoreError::Shape("unscored row".to_string()));
                    }
                    open = true;
                }
            }
        }
        Ok(())
    }

    fn discard_board(&mut self, err: &RestoreError) {
        match err {
            RestoreError::Stale { .. } => log::info!("{err}; starting fresh"),
            _ => log::warn!("{err}; starting fresh"),
        }
        if let Err(err) = self.store.remove(keys::BOARD_STATE) {
            log::warn!("Failed to clear board: {err}");
        }
    }

    fn persist<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        if let Err(err) = write_json(&mut self.store, key, value) {
            log::warn!("Failed to persist '{key}': {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict;
    use crate::daily::FixedClock;
    use crate::store::{CellRecord, MemoryStore, RowRecord};
    use chrono::Duration;

    type TestSession<'a> = PuzzleSession<'a, MemoryStore, FixedClock>;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    /// Secrets LEMON, SUGAR, CRANE on consecutive days from March 1st
    fn dictionary() -> Dictionary {
        let secrets = ["lemon", "sugar", "crane"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let guesses = ["melon", "slate", "eerie", "about", "brain", "house"]
            .into_iter()
            .map(|w| Word::new(w).unwrap());
        Dictionary::new(secrets, guesses)
    }

    fn config() -> GameConfig {
        GameConfig::new().with_epoch(day(1))
    }

    fn open<'a>(dict: &'a Dictionary, store: MemoryStore, clock: &FixedClock) -> TestSession<'a> {
        PuzzleSession::open(dict, store, clock.clone(), config()).unwrap()
    }

    fn type_word(session: &mut TestSession<'_>, word: &str) {
        for ch in word.chars() {
            session.input_letter(ch);
        }
    }

    fn guess(session: &mut TestSession<'_>, word: &str) -> SubmitResult {
        type_word(session, word);
        session.submit_guess()
    }

    fn into_store(session: TestSession<'_>) -> MemoryStore {
        session.store
    }

    #[test]
    fn fresh_session_starts_empty_with_todays_word() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let session = open(&dict, MemoryStore::new(), &clock);

        assert_eq!(session.secret().text(), "lemon");
        assert_eq!(session.outcome(), SessionOutcome::InProgress);
        assert_eq!(session.grid().current_row(), 0);
        assert!(session.keyboard().is_empty());
        assert_eq!(session.puzzle_number(), 0);
        assert_eq!(session.countdown(), "12:00:00");
    }

    #[test]
    fn typing_rules() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        assert!(!session.input_letter('1'));
        assert!(!session.input_letter(' '));
        assert!(!session.delete_letter());
        type_word(&mut session, "melonx");
        assert_eq!(session.grid().current().text(), "MELON");
        assert!(session.delete_letter());
        assert_eq!(session.grid().current_col(), 4);
    }

    #[test]
    fn incomplete_row_submit_is_ignored() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        type_word(&mut session, "mel");
        assert_eq!(session.submit_guess(), SubmitResult::Ignored);
        assert_eq!(session.grid().current_col(), 3);
    }

    #[test]
    fn invalid_word_keeps_row_and_raises_expiring_notice() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        let result = guess(&mut session, "qqqqq");
        assert!(matches!(result, SubmitResult::Rejected(_)));
        assert_eq!(session.grid().current_row(), 0);
        assert_eq!(session.grid().current().text(), "QQQQQ");
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.notice().unwrap().kind, NoticeKind::InvalidWord);
        assert_eq!(session.store().get(keys::BOARD_STATE), None);

        clock.advance(Duration::seconds(1));
        assert!(!session.clear_expired_notice());
        assert!(session.notice().is_some());

        clock.advance(Duration::seconds(1));
        assert!(session.notice().is_none());
        assert!(session.clear_expired_notice());
    }

    #[test]
    fn newer_notice_supersedes_pending_one() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        type_word(&mut session, "qqqqq");
        session.submit_guess();
        clock.advance(Duration::milliseconds(1500));
        session.submit_guess();
        clock.advance(Duration::milliseconds(1000));

        // First deadline has passed, second has not
        assert!(!session.clear_expired_notice());
        assert!(session.notice().is_some());
    }

    #[test]
    fn lemon_melon_then_win() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        let SubmitResult::Accepted { feedback, outcome } = guess(&mut session, "melon") else {
            panic!("melon should be accepted");
        };
        assert_eq!(feedback.score(), 5);
        assert_eq!(outcome, SessionOutcome::InProgress);
        assert_eq!(session.grid().rows()[0].score(), Some(5));
        assert_eq!(session.grid().current_row(), 1);
        assert_eq!(session.keyboard().get('E'), Some(LetterVerdict::Correct));
        assert_eq!(session.keyboard().get('M'), Some(LetterVerdict::Present));

        let SubmitResult::Accepted { outcome, .. } = guess(&mut session, "lemon") else {
            panic!("lemon should be accepted");
        };
        assert_eq!(outcome, SessionOutcome::Won(2));

        let stats = session.stats();
        assert_eq!((stats.played, stats.wins, stats.streak, stats.max_streak), (1, 1, 1, 1));
        assert_eq!(stats.win_percent, 100);

        let last: NaiveDate = read_json(session.store(), keys::LAST_PLAYED).unwrap().unwrap();
        assert_eq!(last, day(1));
    }

    #[test]
    fn first_guess_win_from_zero_stats() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        assert!(matches!(
            guess(&mut session, "lemon"),
            SubmitResult::Accepted { outcome: SessionOutcome::Won(1), .. }
        ));
        let stored = Stats::load(session.store());
        assert_eq!(stored, *session.stats());
        assert_eq!(stored.played, 1);
    }

    #[test]
    fn terminal_session_ignores_input() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "lemon");

        let grid = session.grid().clone();
        assert!(!session.input_letter('A'));
        assert!(!session.delete_letter());
        assert_eq!(session.submit_guess(), SubmitResult::Ignored);
        assert_eq!(session.grid(), &grid);
        assert_eq!(session.stats().played, 1);
    }

    #[test]
    fn running_out_of_rows_loses() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = PuzzleSession::open(
            &dict,
            MemoryStore::new(),
            clock.clone(),
            config().with_attempts(2),
        )
        .unwrap();

        guess(&mut session, "slate");
        let result = guess(&mut session, "about");
        assert!(matches!(
            result,
            SubmitResult::Accepted { outcome: SessionOutcome::Lost, .. }
        ));
        let stats = session.stats();
        assert_eq!((stats.played, stats.wins, stats.streak), (1, 0, 0));
        assert!(!stats.last_outcome_win);
    }

    #[test]
    fn anagram_is_not_a_win() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        let SubmitResult::Accepted { outcome, .. } = guess(&mut session, "melon") else {
            panic!("melon should be accepted");
        };
        assert_eq!(outcome, SessionOutcome::InProgress);
    }

    #[test]
    fn reload_mid_game_restores_grid_and_keyboard() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "melon");
        guess(&mut session, "slate");
        let grid = session.grid().clone();
        let keyboard = session.keyboard().clone();

        let restored = open(&dict, into_store(session), &clock);
        assert_eq!(restored.grid(), &grid);
        assert_eq!(restored.keyboard(), &keyboard);
        assert_eq!(restored.outcome(), SessionOutcome::InProgress);
        assert_eq!(restored.grid().current_row(), 2);
        assert_eq!(restored.grid().current_col(), 0);
    }

    #[test]
    fn reload_after_win_stays_won_and_records_once() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "melon");
        guess(&mut session, "lemon");

        let mut restored = open(&dict, into_store(session), &clock);
        assert_eq!(restored.outcome(), SessionOutcome::Won(2));
        assert_eq!(restored.stats().played, 1);
        assert!(!restored.input_letter('A'));

        let again = open(&dict, into_store(restored), &clock);
        assert_eq!(again.stats().played, 1);
    }

    #[test]
    fn board_ahead_of_stats_is_recorded_on_restore() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "lemon");

        // Simulate a crash between the board write and the stats write
        let mut store = into_store(session);
        store.remove(keys::LAST_PLAYED).unwrap();
        store.remove(keys::GAME_STATS).unwrap();

        let restored = open(&dict, store, &clock);
        assert_eq!(restored.outcome(), SessionOutcome::Won(1));
        assert_eq!(restored.stats().played, 1);
        assert_eq!(restored.stats().wins, 1);
    }

    #[test]
    fn yesterdays_state_is_discarded_on_open() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "melon");
        let store = into_store(session);

        clock.advance(Duration::days(1));
        let fresh = open(&dict, store, &clock);
        assert_eq!(fresh.secret().text(), "sugar");
        assert_eq!(fresh.attempts_used(), 0);
        assert!(fresh.keyboard().is_empty());
        assert_eq!(fresh.store().get(keys::BOARD_STATE), None);

        let record: DailyWordRecord = read_json(fresh.store(), keys::DAILY_WORD).unwrap().unwrap();
        assert_eq!(record.date, day(2));
    }

    #[test]
    fn rollover_resets_open_session_at_midnight() {
        let dict = dictionary();
        let clock = FixedClock::new(day(1).and_hms_opt(23, 59, 30).unwrap());
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "lemon");
        assert!(session.stats().completed_today);
        assert!(!session.rollover_if_new_day());

        clock.advance(Duration::seconds(45));
        assert!(session.rollover_if_new_day());
        assert_eq!(session.day(), day(2));
        assert_eq!(session.secret().text(), "sugar");
        assert_eq!(session.outcome(), SessionOutcome::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert!(session.keyboard().is_empty());
        assert!(!session.stats().completed_today);
        assert_eq!(session.stats().played, 1);
        assert!(session.input_letter('S'));

        // Idempotent within the new day
        assert!(!session.rollover_if_new_day());
        assert_eq!(session.grid().current_col(), 1);
    }

    #[test]
    fn rollover_triggered_by_persisted_day_key() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(2));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "slate");

        let stale = DailyWordRecord {
            date: day(1),
            word: Word::new("lemon").unwrap(),
        };
        write_json(session.store_mut(), keys::DAILY_WORD, &stale).unwrap();

        assert!(session.rollover_if_new_day());
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.secret().text(), "sugar");
    }

    #[test]
    fn missing_daily_record_is_rewritten_without_reset() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "melon");
        session.store_mut().remove(keys::DAILY_WORD).unwrap();

        assert!(!session.rollover_if_new_day());
        assert_eq!(session.attempts_used(), 1);
        assert!(session.store().get(keys::DAILY_WORD).is_some());
    }

    #[test]
    fn streak_continues_across_days() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "lemon");

        clock.advance(Duration::days(1));
        session.rollover_if_new_day();
        guess(&mut session, "sugar");
        assert_eq!(session.stats().streak, 2);

        // Skipping a day still extends the streak
        clock.advance(Duration::days(2));
        session.rollover_if_new_day();
        assert_eq!(session.secret().text(), "lemon");
        guess(&mut session, "lemon");
        assert_eq!(session.stats().streak, 3);
        assert_eq!(session.stats().max_streak, 3);
    }

    #[test]
    fn corrupt_board_falls_back_to_fresh() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut store = MemoryStore::new();
        store.set(keys::BOARD_STATE, "{\"rows\": 12".to_string()).unwrap();

        let session = open(&dict, store, &clock);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.store().get(keys::BOARD_STATE), None);
    }

    #[test]
    fn board_that_disagrees_with_secret_is_discarded() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "melon");

        let mut snapshot: BoardSnapshot =
            read_json(session.store(), keys::BOARD_STATE).unwrap().unwrap();
        snapshot.rows[0].cells[0].state = "correct".to_string();

        assert!(matches!(
            session.restore(snapshot),
            Err(RestoreError::Shape(_))
        ));
    }

    #[test]
    fn restore_rejects_other_day_snapshot() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);

        let snapshot = BoardSnapshot::capture(day(5), &Grid::new(6));
        assert!(matches!(
            session.restore(snapshot),
            Err(RestoreError::Stale { .. })
        ));
    }

    #[test]
    fn version_bump_wipes_board_but_day_stays_finished() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "melon");
        guess(&mut session, "lemon");

        let mut store = into_store(session);
        write_json(&mut store, keys::GAME_VERSION, "0").unwrap();

        let mut reopened = open(&dict, store, &clock);
        assert_eq!(reopened.store().get(keys::BOARD_STATE), None);
        assert_eq!(reopened.attempts_used(), 0);
        assert!(reopened.outcome().is_terminal());
        assert!(!reopened.input_letter('L'));
        assert_eq!(guess(&mut reopened, "lemon"), SubmitResult::Ignored);
        assert_eq!(reopened.stats().played, 1);
        assert!(reopened.stats().completed_today);
    }

    #[test]
    fn removed_board_after_win_keeps_day_locked() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "lemon");

        let mut store = into_store(session);
        store.remove(keys::BOARD_STATE).unwrap();

        let mut reopened = open(&dict, store, &clock);
        assert_eq!(reopened.outcome(), SessionOutcome::Won(1));
        assert!(!reopened.input_letter('M'));
        assert_eq!(reopened.grid().current_col(), 0);
        assert_eq!(reopened.stats().played, 1);
        assert_eq!(reopened.stats().wins, 1);
    }

    #[test]
    fn corrupt_board_after_loss_keeps_day_locked() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        for _ in 0..6 {
            guess(&mut session, "melon");
        }
        assert_eq!(session.outcome(), SessionOutcome::Lost);

        let mut store = into_store(session);
        store.set(keys::BOARD_STATE, "{\"rows\": 12".to_string()).unwrap();

        let mut reopened = open(&dict, store, &clock);
        assert_eq!(reopened.store().get(keys::BOARD_STATE), None);
        assert_eq!(reopened.outcome(), SessionOutcome::Lost);
        assert_eq!(guess(&mut reopened, "lemon"), SubmitResult::Ignored);
        assert_eq!(reopened.stats().played, 1);
        assert_eq!(reopened.stats().wins, 0);
    }

    #[test]
    fn completed_flag_with_blank_board_stays_terminal() {
        let dict = dictionary();
        let clock = FixedClock::at_noon(day(1));
        let mut session = open(&dict, MemoryStore::new(), &clock);
        guess(&mut session, "melon");
        guess(&mut session, "lemon");

        // Board lost but the day is marked complete
        let mut snapshot: BoardSnapshot =
            read_json(session.store(), keys::BOARD_STATE).unwrap().unwrap();
        snapshot.rows[1] = RowRecord {
            cells: vec![CellRecord::default(); 5],
            score: None,
        };
        session.restore(snapshot).unwrap();
        assert_eq!(session.outcome(), SessionOutcome::Won(1));
        assert_eq!(session.stats().played, 1);
    }

    #[test]
    fn empty_dictionary_cannot_open() {
        let dict = Dictionary::new(Vec::new(), Vec::new());
        let clock = FixedClock::at_noon(day(1));
        assert!(matches!(
            PuzzleSession::open(&dict, MemoryStore::new(), clock, config()),
            Err(SessionError::EmptyDictionary)
        ));
    }
}
