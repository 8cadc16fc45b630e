//! Deterministic daily word selection
//!
//! The word for a day is `candidates[days_since_epoch mod len]`. Everyone on
//! the same local calendar day gets the same word, with no network involved,
//! and the sequence repeats every `len(candidates)` days.

use crate::core::Word;
use crate::store::{DailyWordRecord, Storage, keys, read_json_or_discard, write_json};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;

/// Day zero of the word sequence, as accepted on the command line
pub const DEFAULT_EPOCH: &str = "2021-06-19";

/// [`DEFAULT_EPOCH`] as a date
#[must_use]
pub fn default_epoch() -> NaiveDate {
    DEFAULT_EPOCH.parse().unwrap_or_default()
}

/// Maps calendar days to secret candidates
#[derive(Debug, Clone, Copy)]
pub struct DailySelector<'a> {
    candidates: &'a [Word],
    epoch: NaiveDate,
}

impl<'a> DailySelector<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, epoch: NaiveDate) -> Self {
        Self {
            candidates: dictionary.candidates(),
            epoch,
        }
    }

    /// Whole days from the epoch to `today`; negative before the epoch
    #[must_use]
    pub fn days_since_epoch(&self, today: NaiveDate) -> i64 {
        today.signed_duration_since(self.epoch).num_days()
    }

    /// Public puzzle number shown to players
    #[must_use]
    pub fn puzzle_number(&self, today: NaiveDate) -> i64 {
        self.days_since_epoch(today)
    }

    /// Pure selection for `today`; `None` only for an empty candidate list
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use daily_word::daily::{DailySelector, default_epoch};
    /// use daily_word::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::embedded();
    /// let selector = DailySelector::new(&dict, default_epoch());
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// assert_eq!(selector.select(day), selector.select(day));
    /// ```
    #[must_use]
    pub fn select(&self, today: NaiveDate) -> Option<&'a Word> {
        if self.candidates.is_empty() {
            return None;
        }
        let len = self.candidates.len() as i64;
        let index = self.days_since_epoch(today).rem_euclid(len) as usize;
        self.candidates.get(index)
    }

    /// Today's word, served from the persisted `daily_word` record when it is
    /// already for today, otherwise selected and recorded
    pub fn resolve(&self, store: &mut impl Storage, today: NaiveDate) -> Option<Word> {
        let cached: Option<DailyWordRecord> = read_json_or_discard(&*store, keys::DAILY_WORD);
        if let Some(record) = cached {
            if record.date == today {
                return Some(record.word);
            }
            log::info!("Daily word record for {} is stale", record.date);
        }

        let word = self.select(today)?.clone();
        let record = DailyWordRecord {
            date: today,
            word: word.clone(),
        };
        if let Err(err) = write_json(store, keys::DAILY_WORD, &record) {
            log::warn!("Failed to record daily word: {err}");
        }
        log::info!("Selected puzzle #{} for {today}", self.puzzle_number(today));
        Some(word)
    }
}
