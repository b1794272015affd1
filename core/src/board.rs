use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Opened,
    HitMine,
    AllChecked,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// The playing field: a fixed-size grid of cells and the mines hidden in it.
///
/// Coordinates are `(row, col)`. Lookups and moves index the grid directly and
/// panic on coordinates outside of it; use [`Board::validate_coords`] on
/// untrusted input first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    land_mine_count: CellCount,
}

impl Board {
    pub fn new(level: GameLevel) -> Self {
        Self {
            cells: Array2::default((
                usize::from(level.row_size),
                usize::from(level.col_size),
            )),
            land_mine_count: level.land_mine_count,
        }
    }

    /// Builds an initialized board with mines at exactly the given positions.
    pub fn from_mine_coords(
        row_size: Coord,
        col_size: Coord,
        mine_coords: &[Coord2],
    ) -> Result<Self> {
        let mut board = Self::new(GameLevel::new_unchecked(row_size, col_size, 0));

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.cells[coords.to_nd_index()].turn_on_land_mine();
        }

        board.land_mine_count = board.land_mine_cells();
        board.update_nearby_land_mine_counts();
        Ok(board)
    }

    /// Lays out a fresh grid using independent draws from the thread-local generator.
    pub fn initialize_game(&mut self) {
        self.initialize_game_with(MinePlacement::default(), &mut rand::rng());
    }

    pub fn initialize_game_seeded(&mut self, placement: MinePlacement, seed: u64) {
        self.initialize_game_with(placement, &mut StdRng::seed_from_u64(seed));
    }

    pub fn initialize_game_with<R: Rng + ?Sized>(
        &mut self,
        placement: MinePlacement,
        rng: &mut R,
    ) {
        let total_cells = self.total_cells();
        if usize::from(self.land_mine_count) > total_cells {
            log::warn!(
                "Board already full, placing anyway, requested {} mines but only {} cells",
                self.land_mine_count,
                total_cells
            );
        }

        self.cells = Array2::from_elem(self.cells.dim(), Cell::create());
        placement.place(&mut self.cells, self.land_mine_count, rng);
        self.update_nearby_land_mine_counts();

        let placed = self.land_mine_cells();
        if placed != self.land_mine_count {
            log::warn!(
                "Placed mine count mismatch, actual: {}, requested: {}",
                placed,
                self.land_mine_count
            );
        }
        log::debug!(
            "Initialized {}x{} board with {} mines ({:?})",
            self.row_size(),
            self.col_size(),
            placed,
            placement
        );
    }

    fn update_nearby_land_mine_counts(&mut self) {
        for row in 0..self.row_size() {
            for col in 0..self.col_size() {
                if self.is_land_mine_cell((row, col)) {
                    continue;
                }
                let count = self.count_nearby_land_mines((row, col));
                self.cells[(row, col).to_nd_index()].update_nearby_land_mine_count(count);
            }
        }
    }

    fn count_nearby_land_mines(&self, coords: Coord2) -> u8 {
        let count = self
            .cells
            .iter_neighbors(coords)
            .filter(|&pos| self.is_land_mine_cell(pos))
            .count();
        // at most eight neighbors
        count as u8
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.row_size() && coords.1 < self.col_size() {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn row_size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn col_size(&self) -> Coord {
        self.cells.ncols().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Number of mines requested by the level.
    pub fn land_mine_count(&self) -> CellCount {
        self.land_mine_count
    }

    /// Number of cells that actually hold a mine.
    pub fn land_mine_cells(&self) -> CellCount {
        let count = self.cells.iter().filter(|cell| cell.is_land_mine()).count();
        count.try_into().unwrap_or(CellCount::MAX)
    }

    pub fn cell_at(&self, coords: Coord2) -> &Cell {
        &self.cells[coords.to_nd_index()]
    }

    pub fn is_land_mine_cell(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_land_mine()
    }

    pub fn is_opened_cell(&self, coords: Coord2) -> bool {
        self.cell_at(coords).is_opened()
    }

    pub fn sign(&self, coords: Coord2) -> CellSign {
        self.cell_at(coords).sign()
    }

    pub fn is_all_cell_checked(&self) -> bool {
        self.cells.iter().all(Cell::is_checked)
    }

    pub fn flag(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].flag();
    }

    /// Opens a single cell; see [`Board::open_surrounded_cells`] for the cascade.
    pub fn open(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].open();
    }

    /// Opens `coords` and floods outward through cells with no adjacent mines.
    ///
    /// The flood stops at numbered cells (which are opened) and never opens a
    /// mine. Positions outside the grid, opened cells and mines are skipped.
    pub fn open_surrounded_cells(&mut self, coords: Coord2) {
        let mut pending = vec![coords];
        let mut opened = 0usize;

        while let Some(coords) = pending.pop() {
            if self.validate_coords(coords).is_err() {
                continue;
            }

            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.is_opened() || cell.is_land_mine() {
                continue;
            }

            cell.open();
            opened += 1;

            if cell.has_land_mine_count() {
                continue;
            }

            pending.extend(self.cells.iter_neighbors(coords));
        }

        log::trace!("Cascade from {:?} opened {} cells", coords, opened);
    }

    /// Plays one reveal move the way a game loop does: a mine ends the game,
    /// anything else cascades from the chosen cell.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.is_opened_cell(coords) {
            return RevealOutcome::NoChange;
        }

        if self.is_land_mine_cell(coords) {
            self.open(coords);
            return RevealOutcome::HitMine;
        }

        self.open_surrounded_cells(coords);

        if self.is_all_cell_checked() {
            RevealOutcome::AllChecked
        } else {
            RevealOutcome::Opened
        }
    }
}
