#![no_std]

extern crate alloc;

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use grid::*;
pub use types::*;

mod cell;
mod error;
mod grid;
mod types;

/// Validated generation parameters for a [`Grid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GridConfig {
    pub const MAX_ROWS: Coord = 24;
    pub const MAX_COLS: Coord = 30;
    /// Floor on the mine count. Keeps generation away from trivially empty
    /// boards and matches the classic preset table.
    pub const MIN_MINES: CellCount = 10;

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || rows > Self::MAX_ROWS || cols == 0 || cols > Self::MAX_COLS {
            return Err(GameError::InvalidConfiguration);
        }
        if mines < Self::MIN_MINES || mines >= cell_product(rows, cols) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self { rows, cols, mines })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_product(self.rows, self.cols)
    }
}

/// The three classic preset configurations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const fn config(self) -> GridConfig {
        let (rows, cols, mines) = match self {
            Self::Beginner => (9, 9, 10),
            Self::Intermediate => (16, 16, 40),
            Self::Expert => (16, 30, 99),
        };
        GridConfig { rows, cols, mines }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
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

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "Beginner" => Ok(Self::Beginner),
            "Intermediate" => Ok(Self::Intermediate),
            "Expert" => Ok(Self::Expert),
            _ => Err(GameError::InvalidDifficulty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_out_of_bounds_dimensions() {
        assert_eq!(
            GridConfig::new(0, 9, 10),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(
            GridConfig::new(25, 9, 10),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(
            GridConfig::new(9, 31, 10),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn config_rejects_bad_mine_counts() {
        // below the floor
        assert_eq!(
            GridConfig::new(9, 9, 9),
            Err(GameError::InvalidConfiguration)
        );
        // as many mines as cells
        assert_eq!(
            GridConfig::new(9, 9, 81),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn config_accepts_dense_boards() {
        let config = GridConfig::new(1, 30, 29).unwrap();
        assert_eq!(config.total_cells(), 30);
        assert_eq!(config.mines(), 29);
    }

    #[test]
    fn preset_table_matches_the_classic_triples() {
        let beginner = Difficulty::Beginner.config();
        assert_eq!(
            (beginner.rows(), beginner.cols(), beginner.mines()),
            (9, 9, 10)
        );
        let intermediate = Difficulty::Intermediate.config();
        assert_eq!(
            (
                intermediate.rows(),
                intermediate.cols(),
                intermediate.mines()
            ),
            (16, 16, 40)
        );
        let expert = Difficulty::Expert.config();
        assert_eq!((expert.rows(), expert.cols(), expert.mines()), (16, 30, 99));
    }

    #[test]
    fn difficulty_parses_its_display_name_only() {
        assert_eq!("Beginner".parse(), Ok(Difficulty::Beginner));
        assert_eq!("Expert".parse(), Ok(Difficulty::Expert));
        assert_eq!(
            "beginner".parse::<Difficulty>(),
            Err(GameError::InvalidDifficulty)
        );
        assert_eq!(
            "Nightmare".parse::<Difficulty>(),
            Err(GameError::InvalidDifficulty)
        );
    }
}
