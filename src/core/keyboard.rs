//! On-screen keyboard feedback
//!
//! Folds the verdicts of every evaluated row into one best-known verdict per
//! letter. A letter only ever upgrades (`Absent` → `Present` → `Correct`).

use super::feedback::LetterVerdict;
use super::grid::Row;
use rustc_hash::FxHashMap;

/// Best-known verdict per uppercase letter; missing letters are unknown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterVerdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from scratch by folding rows in order
    #[must_use]
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Self {
        let mut state = Self::new();
        for row in rows {
            state.fold_row(row);
        }
        state
    }

    /// Merge one row; cells without a verdict are skipped
    pub fn fold_row(&mut self, row: &Row) {
        for cell in row.cells() {
            if let (Some(letter), Some(verdict)) = (cell.letter, cell.state) {
                self.upgrade(letter, verdict);
            }
        }
    }

    /// Record `verdict` for `letter` unless a better one is already known
    pub fn upgrade(&mut self, letter: char, verdict: LetterVerdict) {
        let letter = letter.to_ascii_uppercase();
        self.letters
            .entry(letter)
            .and_modify(|known| *known = (*known).max(verdict))
            .or_insert(verdict);
    }

    /// Verdict for a letter, `None` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterVerdict> {
        self.letters.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};
    use crate::core::{Cell, Feedback, WORD_LENGTH, Word};

    fn row(guess: &str, secret: &str) -> Row {
        let feedback = Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap());
        let mut cells = [Cell::default(); WORD_LENGTH];
        for ((cell, ch), &verdict) in cells.iter_mut().zip(guess.chars()).zip(feedback.verdicts()) {
            cell.letter = Some(ch.to_ascii_uppercase());
            cell.state = Some(verdict);
        }
        Row::from_cells(cells)
    }

    #[test]
    fn fold_records_each_letter() {
        let state = KeyboardState::from_rows([&row("melon", "lemon")]);
        assert_eq!(state.get('M'), Some(Present));
        assert_eq!(state.get('e'), Some(Correct));
        assert_eq!(state.get('L'), Some(Present));
        assert_eq!(state.get('Z'), None);
    }

    #[test]
    fn fold_is_idempotent() {
        let r = row("crane", "lemon");
        let once = KeyboardState::from_rows([&r]);
        let twice = KeyboardState::from_rows([&r, &r]);
        assert_eq!(once, twice);
    }

    #[test]
    fn correct_never_downgrades() {
        // E is correct in MELON, then absent in EERIE's first slot
        let mut state = KeyboardState::from_rows([&row("melon", "lemon")]);
        state.fold_row(&row("eerie", "lemon"));
        assert_eq!(state.get('E'), Some(Correct));

        state.upgrade('E', Absent);
        assert_eq!(state.get('E'), Some(Correct));
    }

    #[test]
    fn absent_upgrades_to_present() {
        let mut state = KeyboardState::new();
        state.upgrade('a', Absent);
        state.upgrade('A', Present);
        assert_eq!(state.get('a'), Some(Present));
    }

    #[test]
    fn unevaluated_cells_are_ignored() {
        let mut cells = [Cell::default(); WORD_LENGTH];
        cells[0].letter = Some('Q');
        let state = KeyboardState::from_rows([&Row::from_cells(cells)]);
        assert!(state.is_empty());
    }
}
