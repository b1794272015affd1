use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Strategy used to turn cells into mines during initialization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MinePlacement {
    /// Draws a row and a column per mine with no check for repeats, so two
    /// draws can land on the same cell and the board ends up with fewer mines.
    #[default]
    IndependentDraws,
    /// Draws among the cells that are still free, placing exactly as many
    /// mines as requested (capped at the grid size).
    DistinctCells,
}

impl MinePlacement {
    pub(crate) fn place<R: Rng + ?Sized>(
        self,
        cells: &mut Array2<Cell>,
        land_mine_count: CellCount,
        rng: &mut R,
    ) {
        let (rows, cols) = cells.dim();
        if cells.is_empty() {
            if land_mine_count > 0 {
                log::warn!("Cannot place {land_mine_count} mines on an empty board");
            }
            return;
        }

        match self {
            Self::IndependentDraws => {
                for _ in 0..land_mine_count {
                    let row = rng.random_range(0..rows);
                    let col = rng.random_range(0..cols);
                    cells[[row, col]].turn_on_land_mine();
                }
            }
            Self::DistinctCells => {
                let mut free_cells = cells.len();
                let mut mines_placed: CellCount = 0;
                let cells = cells
                    .as_slice_mut()
                    .expect("freshly allocated grid is in standard layout");

                while mines_placed < land_mine_count && free_cells > 0 {
                    let place = rng.random_range(0..free_cells);
                    if let Some(cell) = cells
                        .iter_mut()
                        .filter(|cell| !cell.is_land_mine())
                        .nth(place)
                    {
                        cell.turn_on_land_mine();
                    }
                    mines_placed += 1;
                    free_cells -= 1;
                }
            }
        }
    }
}
