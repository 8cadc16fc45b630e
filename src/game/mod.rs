//! Game session logic: the per-day puzzle, its notices and the player's stats

mod notice;
mod session;
mod stats;

pub use notice::{Notice, NoticeKind};
pub use session::{PuzzleSession, SessionOutcome, SubmitResult};
pub use stats::{Stats, win_percent};
