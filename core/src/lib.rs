#![no_std]

extern crate alloc;

pub use answer::*;
pub use clock::*;
pub use countdown::*;
pub use difficulty::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use score::*;
pub use session::*;
pub use types::*;

mod answer;
mod clock;
mod countdown;
mod difficulty;
mod error;
mod generator;
mod grid;
mod score;
mod session;
mod types;

/// Smallest number that may appear on a grid.
pub const MIN_NUMBER: u8 = 10;

/// Largest number that may appear on a grid.
pub const MAX_NUMBER: u8 = 99;

/// How many distinct numbers fit in `MIN_NUMBER..=MAX_NUMBER`.
pub const NUMBER_POOL: CellCount = (MAX_NUMBER - MIN_NUMBER + 1) as CellCount;

/// Longest answer a player may type into a cell.
pub const MAX_ANSWER_LEN: usize = 2;
