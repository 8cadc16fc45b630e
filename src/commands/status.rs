//! Summary of today's puzzle without playing it

use crate::daily::Clock;
use crate::game::{PuzzleSession, SessionOutcome};
use crate::store::Storage;
use chrono::NaiveDate;

/// Where today's puzzle stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub day: NaiveDate,
    pub puzzle_number: i64,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub outcome: SessionOutcome,
    /// `HH:MM:SS` until the next word
    pub countdown: String,
}

impl StatusReport {
    #[must_use]
    pub fn from_session<S: Storage, C: Clock>(session: &PuzzleSession<'_, S, C>) -> Self {
        Self {
            day: session.day(),
            puzzle_number: session.puzzle_number(),
            attempts_used: session.attempts_used(),
            max_attempts: session.config().max_attempts,
            outcome: session.outcome(),
            countdown: session.countdown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::Word;
    use crate::daily::FixedClock;
    use crate::store::MemoryStore;
    use crate::wordlists::Dictionary;
    use chrono::NaiveTime;

    #[test]
    fn reports_progress_and_countdown() {
        let dict = Dictionary::new(
            vec![Word::new("lemon").unwrap()],
            vec![Word::new("melon").unwrap()],
        );
        let epoch = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let clock = FixedClock::new(today.and_time(NaiveTime::from_hms_opt(21, 30, 15).unwrap()));
        let mut session =
            PuzzleSession::open(&dict, MemoryStore::new(), clock, GameConfig::new().with_epoch(epoch))
                .unwrap();
        for c in "melon".chars() {
            session.input_letter(c);
        }
        session.submit_guess();

        let report = StatusReport::from_session(&session);
        assert_eq!(report.day, today);
        assert_eq!(report.puzzle_number, 10);
        assert_eq!(report.attempts_used, 1);
        assert_eq!(report.max_attempts, 6);
        assert_eq!(report.outcome, SessionOutcome::InProgress);
        assert_eq!(report.countdown, "02:29:45");
    }
}
