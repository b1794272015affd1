use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Hidden,
    Opened,
    Flagged,
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One position of the playing field.
///
/// The adjacency count is only kept accurate for cells that are not mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    nearby_mine_count: u8,
    status: CellStatus,
}

impl Cell {
    pub const fn create() -> Self {
        Self {
            is_mine: false,
            nearby_mine_count: 0,
            status: CellStatus::Hidden,
        }
    }

    pub fn turn_on_land_mine(&mut self) {
        self.is_mine = true;
    }

    pub fn update_nearby_land_mine_count(&mut self, count: u8) {
        self.nearby_mine_count = count;
    }

    /// Opens the cell, overriding a flag. Opening is terminal.
    pub fn open(&mut self) {
        self.status = CellStatus::Opened;
    }

    /// Toggles the flag on a hidden cell; opened cells are left alone.
    pub fn flag(&mut self) {
        self.status = match self.status {
            CellStatus::Hidden => CellStatus::Flagged,
            CellStatus::Flagged => CellStatus::Hidden,
            CellStatus::Opened => CellStatus::Opened,
        };
    }

    pub const fn status(&self) -> CellStatus {
        self.status
    }

    pub const fn nearby_land_mine_count(&self) -> u8 {
        self.nearby_mine_count
    }

    pub const fn is_opened(&self) -> bool {
        matches!(self.status, CellStatus::Opened)
    }

    pub const fn is_land_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn has_land_mine_count(&self) -> bool {
        self.nearby_mine_count > 0
    }

    /// Opened or flagged, which is all the win check looks at.
    pub const fn is_checked(&self) -> bool {
        !matches!(self.status, CellStatus::Hidden)
    }

    pub const fn sign(&self) -> CellSign {
        match self.status {
            CellStatus::Hidden => CellSign::Closed,
            CellStatus::Flagged => CellSign::Flag,
            CellStatus::Opened if self.is_mine => CellSign::LandMine,
            CellStatus::Opened if self.nearby_mine_count == 0 => CellSign::Empty,
            CellStatus::Opened => CellSign::Count(self.nearby_mine_count),
        }
    }
}

/// What a front end should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellSign {
    Closed,
    Flag,
    LandMine,
    Empty,
    Count(u8),
}

impl CellSign {
    pub const CLOSED: &'static str = "□";
    pub const FLAG: &'static str = "⚑";
    pub const LAND_MINE: &'static str = "☼";
    pub const EMPTY: &'static str = "■";
}

impl fmt::Display for CellSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str(Self::CLOSED),
            Self::Flag => f.write_str(Self::FLAG),
            Self::LandMine => f.write_str(Self::LAND_MINE),
            Self::Empty => f.write_str(Self::EMPTY),
            Self::Count(count) => write!(f, "{count}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_cell_is_hidden_safe_and_blank() {
        let cell = Cell::create();

        assert_eq!(cell.status(), CellStatus::Hidden);
        assert!(!cell.is_land_mine());
        assert!(!cell.has_land_mine_count());
        assert!(!cell.is_checked());
        assert_eq!(cell, Cell::default());
    }

    #[test]
    fn turning_on_mine_twice_keeps_mine() {
        let mut cell = Cell::create();
        cell.turn_on_land_mine();
        cell.turn_on_land_mine();

        assert!(cell.is_land_mine());
    }

    #[test]
    fn flag_twice_returns_to_hidden() {
        let mut cell = Cell::create();

        cell.flag();
        assert_eq!(cell.status(), CellStatus::Flagged);
        assert!(cell.is_checked());

        cell.flag();
        assert_eq!(cell.status(), CellStatus::Hidden);
        assert!(!cell.is_checked());
    }

    #[test]
    fn open_overrides_flag_and_is_terminal() {
        let mut cell = Cell::create();
        cell.flag();
        cell.open();
        assert!(cell.is_opened());

        cell.flag();
        assert!(cell.is_opened());

        cell.open();
        assert_eq!(cell.status(), CellStatus::Opened);
    }

    #[test]
    fn signs_follow_status() {
        let mut cell = Cell::create();
        assert_eq!(cell.sign(), CellSign::Closed);

        cell.flag();
        assert_eq!(cell.sign(), CellSign::Flag);

        cell.open();
        assert_eq!(cell.sign(), CellSign::Empty);

        let mut numbered = Cell::create();
        numbered.update_nearby_land_mine_count(3);
        numbered.open();
        assert_eq!(numbered.sign(), CellSign::Count(3));
        assert!(numbered.has_land_mine_count());

        let mut mine = Cell::create();
        mine.turn_on_land_mine();
        mine.open();
        assert_eq!(mine.sign(), CellSign::LandMine);
    }

    #[test]
    fn signs_render_as_single_glyphs() {
        assert_eq!(CellSign::Closed.to_string(), "□");
        assert_eq!(CellSign::Flag.to_string(), "⚑");
        assert_eq!(CellSign::LandMine.to_string(), "☼");
        assert_eq!(CellSign::Empty.to_string(), "■");
        assert_eq!(CellSign::Count(7).to_string(), "7");
    }
}
