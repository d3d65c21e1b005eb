use alloc::collections::BTreeSet;
use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Generation strategy that draws every cell uniformly from the two-digit range and redraws on collision.
#[derive(Clone, Debug)]
pub struct RandomNumberGridGenerator {
    rng: SmallRng,
}

impl RandomNumberGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl NumberGridGenerator for RandomNumberGridGenerator {
    fn generate(&mut self, size: Coord) -> Result<NumberGrid> {
        // the redraw loop below only terminates while unused numbers remain
        GameConfig::new_unchecked(size, 0).validate()?;

        let mut used = BTreeSet::new();
        let mut numbers: Array2<u8> = Array2::default((size, size).to_nd_index());
        for cell in numbers.iter_mut() {
            let number = loop {
                let candidate = self.rng.random_range(MIN_NUMBER..=MAX_NUMBER);
                if used.insert(candidate) {
                    break candidate;
                }
            };
            *cell = number;
        }

        log::debug!("generated {}x{} number grid", size, size);
        Ok(NumberGrid::from_array_unchecked(numbers))
    }
}
