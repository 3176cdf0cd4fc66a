use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::CellPos;

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    /// All piece kinds in table order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Returns the four cell offsets of this piece in the given rotation.
    ///
    /// Offsets are relative to the piece origin (the top-left corner of its 4×4
    /// bounding box) and are returned in table order.
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_engine::{PieceKind, PieceRotation};
    ///
    /// let offsets = PieceKind::I.offsets(PieceRotation::SPAWN);
    /// assert_eq!(offsets, [(0, 1), (1, 1), (2, 1), (3, 1)]);
    /// ```
    #[must_use]
    pub const fn offsets(self, rotation: PieceRotation) -> [CellPos; 4] {
        SHAPES[self as usize][rotation.as_usize()]
    }

    /// Returns whether the cell at `(col, row)` of the bounding box is part of the
    /// piece in the given rotation.
    #[must_use]
    pub fn is_occupied(self, rotation: PieceRotation, (col, row): CellPos) -> bool {
        self.offsets(rotation).contains(&(col, row))
    }

    /// Returns the width and height of the smallest box holding the piece, measured
    /// from the bounding-box origin.
    #[must_use]
    pub fn extent(self, rotation: PieceRotation) -> (i32, i32) {
        let offsets = self.offsets(rotation);
        let width = offsets.iter().map(|&(col, _)| col + 1).max().unwrap_or(0);
        let height = offsets.iter().map(|&(_, row)| row + 1).max().unwrap_or(0);
        (width, height)
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::T.as_char(), 'T');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    /// Parses a piece kind from a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// use blocktris_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_char('S'), Some(PieceKind::S));
    /// assert_eq!(PieceKind::from_char('X'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'S' => Some(PieceKind::S),
            'Z' => Some(PieceKind::Z),
            'J' => Some(PieceKind::J),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Rotation state of a piece.
///
/// Represents one of four precomputed rotation states, `0` being the spawn
/// orientation. Rotation operations wrap around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRotation(u8);

impl PieceRotation {
    /// Orientation every piece spawns in.
    pub const SPAWN: Self = Self(0);

    /// All four rotation states in order.
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Creates a rotation state, reducing `index` modulo 4.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index % 4)
    }

    /// Returns the rotation index in `0..4`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Precomputed cell offsets for every `(kind, rotation)` pair.
///
/// The tables are written out rather than derived by rotating the spawn shape so
/// that each piece keeps its classic resting positions: the I-piece only has two
/// distinct states and the O-piece never moves inside its box.
const SHAPES: [[[CellPos; 4]; 4]; PieceKind::LEN] = [
    // I-piece
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O-piece
    [
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
        [(0, 0), (0, 1), (1, 0), (1, 1)],
    ],
    // T-piece
    [
        [(0, 1), (1, 0), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 1)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S-piece
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z-piece
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
    ],
    // J-piece
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (1, 2), (0, 2)],
    ],
    // L-piece
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_shape_has_four_distinct_cells_inside_box() {
        for kind in PieceKind::ALL {
            for rotation in PieceRotation::ALL {
                let offsets = kind.offsets(rotation);
                let distinct: HashSet<_> = offsets.iter().copied().collect();
                assert_eq!(distinct.len(), 4, "{kind:?} rotation {rotation:?}");
                for (col, row) in offsets {
                    assert!((0..4).contains(&col), "{kind:?} {rotation:?} col {col}");
                    assert!((0..4).contains(&row), "{kind:?} {rotation:?} row {row}");
                }
            }
        }
    }

    #[test]
    fn test_o_piece_is_rotation_invariant() {
        let spawn = PieceKind::O.offsets(PieceRotation::SPAWN);
        for rotation in PieceRotation::ALL {
            assert_eq!(PieceKind::O.offsets(rotation), spawn);
        }
    }

    #[test]
    fn test_i_piece_alternates_between_two_states() {
        let horizontal = PieceKind::I.offsets(PieceRotation::new(0));
        let vertical = PieceKind::I.offsets(PieceRotation::new(1));
        assert_ne!(horizontal, vertical);
        assert_eq!(PieceKind::I.offsets(PieceRotation::new(2)), horizontal);
        assert_eq!(PieceKind::I.offsets(PieceRotation::new(3)), vertical);
    }

    #[test]
    fn test_other_pieces_have_four_distinct_states() {
        for kind in [PieceKind::T, PieceKind::J, PieceKind::L] {
            let states: HashSet<Vec<CellPos>> = PieceRotation::ALL
                .iter()
                .map(|&r| {
                    let mut cells = kind.offsets(r).to_vec();
                    cells.sort_unstable();
                    cells
                })
                .collect();
            assert_eq!(states.len(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_wraps_modulo_four() {
        let mut rotation = PieceRotation::SPAWN;
        for expected in [1, 2, 3, 0, 1] {
            rotation = rotation.rotated_right();
            assert_eq!(rotation.index(), expected);
        }
        assert_eq!(PieceRotation::new(7), PieceRotation::new(3));
    }

    #[test]
    fn test_extent() {
        assert_eq!(PieceKind::I.extent(PieceRotation::SPAWN), (4, 2));
        assert_eq!(PieceKind::O.extent(PieceRotation::SPAWN), (2, 2));
        assert_eq!(PieceKind::T.extent(PieceRotation::SPAWN), (3, 2));
        assert_eq!(PieceKind::I.extent(PieceRotation::new(1)), (2, 4));
    }

    #[test]
    fn test_piece_kind_char_conversion() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(PieceKind::from_char('x'), None);
        assert_eq!(PieceKind::from_char('#'), None);
    }
}
