use serde::{Deserialize, Serialize};

use crate::*;

/// Grid dimensions and mine count a board is built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLevel {
    pub row_size: Coord,
    pub col_size: Coord,
    pub land_mine_count: CellCount,
}

impl GameLevel {
    pub const fn new_unchecked(
        row_size: Coord,
        col_size: Coord,
        land_mine_count: CellCount,
    ) -> Self {
        Self {
            row_size,
            col_size,
            land_mine_count,
        }
    }

    pub fn new(row_size: Coord, col_size: Coord, land_mine_count: CellCount) -> Result<Self> {
        let level = Self::new_unchecked(row_size, col_size, land_mine_count);
        level.validate()
    }

    /// Rejects levels that ask for more mines than the grid has cells.
    pub fn validate(self) -> Result<Self> {
        if self.land_mine_count > self.total_cells() {
            Err(GameError::TooManyMines)
        } else {
            Ok(self)
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.row_size, self.col_size)
    }

    pub const fn very_beginner() -> Self {
        Self::new_unchecked(4, 5, 2)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(8, 10, 10)
    }

    pub const fn middle() -> Self {
        Self::new_unchecked(14, 18, 40)
    }

    pub const fn advanced() -> Self {
        Self::new_unchecked(20, 24, 99)
    }
}

impl Default for GameLevel {
    fn default() -> Self {
        Self::very_beginner()
    }
}
