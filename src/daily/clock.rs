//! Wall-clock access and the midnight countdown
//!
//! Days are always the player's local calendar day.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current local time
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar day
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// The machine's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock; clones share the same time
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Rc<Cell<NaiveDateTime>>,
}

impl FixedClock {
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    /// Clock set to noon of `date`
    #[must_use]
    pub fn at_noon(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)))
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// Time left until the next local midnight
#[must_use]
pub fn until_midnight(now: NaiveDateTime) -> Duration {
    now.date()
        .succ_opt()
        .map_or(Duration::zero(), |tomorrow| {
            tomorrow.and_time(NaiveTime::MIN) - now
        })
}

/// Format a duration as `HH:MM:SS`, clamping negatives to zero
///
/// # Examples
/// ```
/// use chrono::Duration;
/// use daily_word::daily::format_countdown;
///
/// assert_eq!(format_countdown(Duration::seconds(3 * 3600 + 5 * 60 + 9)), "03:05:09");
/// ```
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
