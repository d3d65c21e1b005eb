use crate::CellCount;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must have at least one cell")]
    EmptyGrid,
    #[error("Grid of {cells} cells cannot hold unique two-digit numbers")]
    GridTooLarge { cells: CellCount },
    #[error("Grid rows do not form a square")]
    InvalidGridShape,
    #[error("Number {0} is not a two-digit number")]
    NumberOutOfRange(u8),
    #[error("Number {0} appears more than once")]
    DuplicateNumber(u8),
    #[error("Unknown difficulty")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
