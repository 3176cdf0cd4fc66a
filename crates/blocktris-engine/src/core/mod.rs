//! Board geometry, piece shapes and placement rules.
//!
//! Coordinates are `(col, row)` pairs: column 0 is the left wall side, row 0 is the
//! top of the well and rows grow downward.

pub use self::{board::*, piece::*, shape::*};

pub(crate) mod board;
pub(crate) mod piece;
pub(crate) mod shape;

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 10;
/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 20;

/// Absolute `(col, row)` position of a single cell.
///
/// Signed so that candidate positions left of or above the board can be represented
/// and rejected by [`Board::is_valid_position`].
pub type CellPos = (i32, i32);
