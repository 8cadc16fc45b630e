//! Calendar-day concerns: which word is today's and how long until the next

mod clock;
mod selector;

pub use clock::{Clock, FixedClock, SystemClock, format_countdown, until_midnight};
pub use selector::{DEFAULT_EPOCH, DailySelector, default_epoch};
