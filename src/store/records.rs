//! Persisted value shapes
//!
//! Board cells use the string form `{ "letter": "E", "state": "correct" }`
//! with empty strings for blank letters and unknown states.

use crate::core::{Cell, Grid, LetterVerdict, Row, WORD_LENGTH, Word};
use crate::error::RestoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The word chosen for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWordRecord {
    pub date: NaiveDate,
    pub word: Word,
}

/// One persisted cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    #[serde(default)]
    pub letter: String,
    #[serde(default)]
    pub state: String,
}

/// One persisted row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub cells: Vec<CellRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
}

/// Grid snapshot tagged with the day it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub date: NaiveDate,
    pub rows: Vec<RowRecord>,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            letter: cell.letter.map(String::from).unwrap_or_default(),
            state: cell
                .state
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}

impl CellRecord {
    fn to_cell(&self) -> Result<Cell, RestoreError> {
        let mut chars = self.letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_uppercase()),
            _ => return Err(RestoreError::Shape(format!("bad letter {:?}", self.letter))),
        };
        let state = if self.state.is_empty() {
            None
        } else {
            Some(
                LetterVerdict::from_name(&self.state)
                    .ok_or_else(|| RestoreError::Shape(format!("bad state {:?}", self.state)))?,
            )
        };
        if state.is_some() && letter.is_none() {
            return Err(RestoreError::Shape("state without letter".to_string()));
        }
        Ok(Cell { letter, state })
    }
}

impl BoardSnapshot {
    /// Capture a grid for `date`
    #[must_use]
    pub fn capture(date: NaiveDate, grid: &Grid) -> Self {
        let rows = grid
            .rows()
            .iter()
            .map(|row| RowRecord {
                cells: row.cells().iter().map(CellRecord::from).collect(),
                score: row.score(),
            })
            .collect();
        Self { date, rows }
    }

    /// Validate the day and shape and turn the records back into rows
    ///
    /// # Errors
    /// - `RestoreError::Stale` if the snapshot belongs to another day
    /// - `RestoreError::Shape` if the row or cell counts, letters or states are invalid
    pub fn into_rows(self, today: NaiveDate, attempts: usize) -> Result<Vec<Row>, RestoreError> {
        if self.date != today {
            return Err(RestoreError::Stale {
                stored: self.date,
                today,
            });
        }
        if self.rows.len() != attempts {
            return Err(RestoreError::Shape(format!(
                "expected {attempts} rows, found {}",
                self.rows.len()
            )));
        }

        self.rows
            .iter()
            .map(|record| {
                if record.cells.len() != WORD_LENGTH {
                    return Err(RestoreError::Shape(format!(
                        "expected {WORD_LENGTH} cells, found {}",
                        record.cells.len()
                    )));
                }
                let mut cells = [Cell::default(); WORD_LENGTH];
                for (cell, cell_record) in cells.iter_mut().zip(&record.cells) {
                    *cell = cell_record.to_cell()?;
                }
                Ok(Row::from_cells(cells))
            })
            .collect()
    }
}
