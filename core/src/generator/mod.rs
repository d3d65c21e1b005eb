use crate::*;
pub use random::*;

mod random;

pub trait NumberGridGenerator {
    /// Produces a fresh `size`×`size` grid of distinct two-digit numbers.
    fn generate(&mut self, size: Coord) -> Result<NumberGrid>;
}

