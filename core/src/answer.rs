use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellEdit {
    NoChange,
    Changed,
}

impl CellEdit {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Keeps only ASCII digits of `raw`, at most [`MAX_ANSWER_LEN`] of them.
pub fn sanitize_answer(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_ANSWER_LEN)
        .collect()
}

/// What the player typed into each cell, same shape as the [`NumberGrid`] being recalled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerGrid {
    answers: Array2<String>,
}

impl AnswerGrid {
    pub fn empty(size: Coord) -> Self {
        Self {
            answers: Array2::default((size, size).to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord {
        self.answers.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> &str {
        &self.answers[coords.to_nd_index()]
    }

    /// Stores the sanitized form of `raw` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// If `(row, col)` lies outside the grid.
    pub fn set_cell(&mut self, row: Coord, col: Coord, raw: &str) -> CellEdit {
        let value = sanitize_answer(raw);
        let cell = &mut self.answers[(row, col).to_nd_index()];
        if *cell == value {
            CellEdit::NoChange
        } else {
            *cell = value;
            CellEdit::Changed
        }
    }

    /// Answers in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.answers.iter().map(String::as_str)
    }

    pub fn filled_count(&self) -> CellCount {
        let filled = self.iter().filter(|answer| !answer.is_empty()).count();
        filled.try_into().unwrap_or(CellCount::MAX)
    }
}
