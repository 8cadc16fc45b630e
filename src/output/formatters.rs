//! Formatting utilities for terminal output

use crate::core::{LetterVerdict, Row};
use colored::Color;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Face shown next to an evaluated row, indexed by its score
pub const SCORE_EMOJI: [&str; 6] = ["😭", "😢", "😐", "🙂", "😄", "🎉"];

/// Emoji for a row score; anything above five shows the top face
#[must_use]
pub fn score_emoji(score: u8) -> &'static str {
    SCORE_EMOJI[usize::from(score).min(SCORE_EMOJI.len() - 1)]
}

/// Tile colour for a verdict
#[must_use]
pub const fn verdict_color(verdict: LetterVerdict) -> Color {
    match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::BrightBlack,
    }
}

/// Spoiler-free emoji line for a row, `None` while it is not yet scored
#[must_use]
pub fn row_to_emoji(row: &Row) -> Option<String> {
    row.feedback().map(|feedback| feedback.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Win rate as a bar out of 100
#[must_use]
pub fn win_rate_bar(win_percent: u32, width: usize) -> String {
    create_progress_bar(f64::from(win_percent), 100.0, width)
}
