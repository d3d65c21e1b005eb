use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid size and memorize time resolved from a [`Difficulty`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: Coord,
    pub time_limit: u32,
}

impl GameConfig {
    pub const fn new_unchecked(grid_size: Coord, time_limit: u32) -> Self {
        Self {
            grid_size,
            time_limit,
        }
    }

    /// Checks that the grid can be filled with unique two-digit numbers.
    pub fn new(grid_size: Coord, time_limit: u32) -> Result<Self> {
        let config = Self::new_unchecked(grid_size, time_limit);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let cells = self.total_cells();
        if cells == 0 {
            Err(GameError::EmptyGrid)
        } else if cells > NUMBER_POOL {
            Err(GameError::GridTooLarge { cells })
        } else {
            Ok(())
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.grid_size, self.grid_size)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Easy => GameConfig::new_unchecked(3, 30),
            Medium => GameConfig::new_unchecked(5, 60),
            Hard => GameConfig::new_unchecked(7, 90),
        }
    }

    pub const fn grid_size(self) -> Coord {
        self.config().grid_size
    }

    pub const fn time_limit(self) -> u32 {
        self.config().time_limit
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownDifficulty)
    }
}
