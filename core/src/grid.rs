use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ground truth the player has to memorize: a square grid of distinct two-digit numbers.
///
/// The default value is the empty 0×0 grid used while no game is running.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberGrid {
    numbers: Array2<u8>,
}

impl NumberGrid {
    /// Wraps an array that is already known to be square, in range and duplicate free.
    pub(crate) fn from_array_unchecked(numbers: Array2<u8>) -> Self {
        debug_assert_eq!(numbers.nrows(), numbers.ncols());
        Self { numbers }
    }

    /// Builds a grid from explicit rows, checking every invariant the generator guarantees.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::EmptyGrid);
        }
        let size_coord = Coord::try_from(size).map_err(|_| GameError::InvalidGridShape)?;
        GameConfig::new_unchecked(size_coord, 0).validate()?;

        let mut seen = BTreeSet::new();
        let mut numbers = Array2::default([size, size]);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GameError::InvalidGridShape);
            }
            for (col, &value) in values.iter().enumerate() {
                if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
                    return Err(GameError::NumberOutOfRange(value));
                }
                if !seen.insert(value) {
                    return Err(GameError::DuplicateNumber(value));
                }
                numbers[[row, col]] = value;
            }
        }

        Ok(Self { numbers })
    }

    pub fn size(&self) -> Coord {
        self.numbers.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<u8> {
        self.numbers.get(coords.to_nd_index()).copied()
    }

    /// Numbers in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers.iter().copied()
    }
}

impl Index<Coord2> for NumberGrid {
    type Output = u8;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.numbers[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_a_valid_square() {
        let grid = NumberGrid::from_rows(&[[10u8, 11], [12, 99]]).unwrap();

        assert_eq!(grid.size(), 2);
        assert_eq!(grid.total_cells(), 4);
        assert_eq!(grid[(1, 1)], 99);
        assert_eq!(grid.get((2, 0)), None);
        assert!(grid.iter().eq([10, 11, 12, 99]));
    }

    #[test]
    fn from_rows_rejects_broken_grids() {
        let empty: &[[u8; 0]] = &[];
        assert_eq!(NumberGrid::from_rows(empty), Err(GameError::EmptyGrid));
        assert_eq!(
            NumberGrid::from_rows(&[&[10u8, 11][..], &[12][..]]),
            Err(GameError::InvalidGridShape)
        );
        assert_eq!(
            NumberGrid::from_rows(&[[10u8, 9], [12, 13]]),
            Err(GameError::NumberOutOfRange(9))
        );
        assert_eq!(
            NumberGrid::from_rows(&[[10u8, 11], [11, 13]]),
            Err(GameError::DuplicateNumber(11))
        );
    }

    #[test]
    fn default_grid_is_empty() {
        let grid = NumberGrid::default();

        assert!(grid.is_empty());
        assert_eq!(grid.size(), 0);
        assert_eq!(grid.validate_coords((0, 0)), Err(GameError::InvalidCoords));
    }
}
