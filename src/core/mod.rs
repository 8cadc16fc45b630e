//! Core domain types for the daily puzzle
//!
//! Words, guess evaluation, the guess grid and keyboard feedback. Everything
//! here is pure: no storage, no clock.

mod feedback;
mod grid;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterVerdict};
pub use grid::{Cell, Grid, Row};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
