//! Playing-field engine for a single-player mine-detection game.
//!
//! A [`Board`] owns a grid of [`Cell`]s, places mines, precomputes adjacency
//! counts and implements the open, flag and cascade-open moves. Input parsing
//! and rendering are left to the caller; [`Board::sign`] gives a per-cell
//! render hint.

pub use board::*;
pub use cell::*;
pub use error::*;
pub use level::*;
pub use placement::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod level;
mod placement;
mod types;
