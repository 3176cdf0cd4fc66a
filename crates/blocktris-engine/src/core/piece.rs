use std::fmt;

use super::{
    BOARD_WIDTH, CellPos,
    board::Board,
    shape::{PieceKind, PieceRotation},
};

/// Column of the spawn origin, horizontally centering the 4×4 bounding box.
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const SPAWN_COL: i32 = (BOARD_WIDTH / 2) as i32 - 2;
/// Row of the spawn origin.
pub const SPAWN_ROW: i32 = 0;

/// A falling piece: kind, rotation state and origin on the board.
///
/// Pieces are values. Movement and rotation return new candidate pieces that the
/// caller validates against a [`Board`] before committing them.
///
/// # Example
///
/// ```
/// use blocktris_engine::{Board, Piece, PieceKind};
///
/// let board = Board::EMPTY;
/// let piece = Piece::spawn(PieceKind::T);
/// let candidate = piece.left().rotated();
/// assert!(board.is_valid_position(&candidate));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: PieceRotation,
    origin: CellPos,
}

/// Formats as `kind#rotation@col,row`, e.g. `S#1@4,18`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (col, row) = self.origin;
        write!(
            f,
            "{}#{}@{col},{row}",
            self.kind.as_char(),
            self.rotation.index()
        )
    }
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, rotation: PieceRotation, origin: CellPos) -> Self {
        Self {
            kind,
            rotation,
            origin,
        }
    }

    /// Creates a piece at the spawn origin in its spawn orientation.
    #[must_use]
    pub const fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, PieceRotation::SPAWN, (SPAWN_COL, SPAWN_ROW))
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub const fn origin(&self) -> CellPos {
        self.origin
    }

    /// Returns the four absolute cells covered by this piece.
    #[must_use]
    pub fn occupied_cells(&self) -> [CellPos; 4] {
        let (col, row) = self.origin;
        self.kind
            .offsets(self.rotation)
            .map(|(dc, dr)| (col + dc, row + dr))
    }

    /// Returns a copy moved by `(dcol, drow)`.
    #[must_use]
    pub const fn shifted(&self, dcol: i32, drow: i32) -> Self {
        let (col, row) = self.origin;
        Self::new(self.kind, self.rotation, (col + dcol, row + drow))
    }

    #[must_use]
    pub const fn left(&self) -> Self {
        self.shifted(-1, 0)
    }

    #[must_use]
    pub const fn right(&self) -> Self {
        self.shifted(1, 0)
    }

    #[must_use]
    pub const fn down(&self) -> Self {
        self.shifted(0, 1)
    }

    /// Returns a copy in the next rotation state.
    #[must_use]
    pub const fn rotated(&self) -> Self {
        Self::new(self.kind, self.rotation.rotated_right(), self.origin)
    }

    /// Returns the lowest position this piece reaches by falling straight down.
    ///
    /// Returns `self` unchanged when it cannot move down.
    #[must_use]
    pub fn drop_position(&self, board: &Board) -> Self {
        let mut dropped = *self;
        while let Some(piece) = Some(dropped.down()).filter(|p| board.is_valid_position(p)) {
            dropped = piece;
        }
        dropped
    }
}
