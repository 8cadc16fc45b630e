//! Guess grid: rows of lettered cells plus the typing cursor
//!
//! Rows before the cursor row are fully evaluated, the cursor row may be
//! partially typed, and every row after it is empty.

use super::feedback::{Feedback, LetterVerdict};
use super::word::{WORD_LENGTH, Word};

/// One square of the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Uppercase letter, `None` when empty
    pub letter: Option<char>,
    /// Verdict, `None` until the row is evaluated
    pub state: Option<LetterVerdict>,
}

/// One guess row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
    score: Option<u8>,
}

impl Row {
    /// Build a row from raw cells; the score is derived from the states
    #[must_use]
    pub fn from_cells(cells: [Cell; WORD_LENGTH]) -> Self {
        let mut row = Self { cells, score: None };
        if row.is_evaluated() {
            row.score = Some(
                cells
                    .iter()
                    .filter(|c| c.state.is_some_and(|s| s != LetterVerdict::Absent))
                    .count() as u8,
            );
        }
        row
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Count of non-absent cells once evaluated
    #[must_use]
    pub const fn score(&self) -> Option<u8> {
        self.score
    }

    /// Number of leading cells holding a letter
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().take_while(|c| c.letter.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.letter.is_some())
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.letter.is_none())
    }

    /// Every cell has both a letter and a verdict
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.letter.is_some() && c.state.is_some())
    }

    /// Letters typed so far, in order
    #[must_use]
    pub fn text(&self) -> String {
        self.letters().collect()
    }

    fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(|c| c.letter)
    }

    /// The row as a word, once all five letters are in
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        Word::from_letters(self.letters()).ok()
    }

    /// Verdicts of an evaluated row
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        for (slot, cell) in verdicts.iter_mut().zip(&self.cells) {
            *slot = cell.state?;
        }
        Some(Feedback::new(verdicts))
    }

    /// Write verdicts and score into the row
    pub fn apply(&mut self, feedback: &Feedback) {
        for (cell, &verdict) in self.cells.iter_mut().zip(feedback.verdicts()) {
            cell.state = Some(verdict);
        }
        self.score = Some(feedback.score());
    }
}

/// All rows of a day's puzzle plus the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    current_row: usize,
    current_col: usize,
}

impl Grid {
    /// Empty grid with `attempts` rows
    #[must_use]
    pub fn new(attempts: usize) -> Self {
        Self {
            rows: vec![Row::default(); attempts.max(1)],
            current_row: 0,
            current_col: 0,
        }
    }

    /// Rehydrate rows and place the cursor on the first row with an empty
    /// cell, or on the last row when every cell is filled
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        if rows.is_empty() {
            return Self::new(1);
        }
        let current_row = rows
            .iter()
            .position(|row| !row.is_full())
            .unwrap_or(rows.len() - 1);
        let current_col = rows[current_row].filled();
        Self {
            rows,
            current_row,
            current_col,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    /// Row under the cursor
    #[must_use]
    pub fn current(&self) -> &Row {
        &self.rows[self.current_row]
    }

    #[must_use]
    pub fn is_last_row(&self) -> bool {
        self.current_row + 1 == self.rows.len()
    }

    /// Rows with at least one letter and a full set of verdicts
    pub fn evaluated_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_evaluated())
    }

    /// Type a letter at the cursor; returns false when the row is full
    pub fn push_letter(&mut self, letter: char) -> bool {
        if self.current_col >= WORD_LENGTH {
            return false;
        }
        let row = &mut self.rows[self.current_row];
        row.cells[self.current_col].letter = Some(letter);
        self.current_col += 1;
        true
    }

    /// Erase the letter before the cursor; returns false at column zero
    pub fn pop_letter(&mut self) -> bool {
        if self.current_col == 0 {
            return false;
        }
        self.current_col -= 1;
        self.rows[self.current_row].cells[self.current_col] = Cell::default();
        true
    }

    /// Score the cursor row
    pub fn apply_to_current(&mut self, feedback: &Feedback) {
        self.rows[self.current_row].apply(feedback);
    }

    /// Move to the start of the next row; returns false on the last row
    pub fn advance(&mut self) -> bool {
        if self.is_last_row() {
            return false;
        }
        self.current_row += 1;
        self.current_col = 0;
        true
    }
}
