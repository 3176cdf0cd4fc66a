use super::{BOARD_HEIGHT, BOARD_WIDTH, CellPos, piece::Piece, shape::PieceKind};

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Occupied cell that carries no piece kind (pre-filled rows in scenarios).
    Garbage,
    /// Cell locked from a piece of the given kind.
    Piece(PieceKind),
}

/// A single row of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardRow {
    cells: [Cell; BOARD_WIDTH],
}

impl BoardRow {
    const EMPTY: Self = Self {
        cells: [Cell::Empty; BOARD_WIDTH],
    };

    fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

/// Fixed-size occupancy grid of the well.
///
/// The board is only mutated by locking a piece ([`Board::fill_piece`]) and by
/// removing full rows ([`Board::clear_full_rows`]).
///
/// # Example
///
/// ```
/// use blocktris_engine::{Board, Cell};
///
/// let mut board = Board::from_ascii(
///     r"
///     ##########.
///     ",
/// );
/// assert!(!board.is_row_full(19));
/// board.occupy(9, 19, Cell::Garbage);
/// assert_eq!(board.clear_full_rows(), 1);
/// assert!(board.is_empty(0, 19));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [BoardRow::EMPTY; BOARD_HEIGHT],
    };

    /// Returns the cell at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        self.rows[row].cells[col]
    }

    /// Returns whether the cell at `(col, row)` is empty.
    ///
    /// Callers check bounds first; see [`Board::is_valid_position`].
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    #[must_use]
    pub fn is_empty(&self, col: usize, row: usize) -> bool {
        self.cell(col, row).is_empty()
    }

    /// Sets the cell at `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn occupy(&mut self, col: usize, row: usize, cell: Cell) {
        self.rows[row].cells[col] = cell;
    }

    /// Returns whether every column of `row` is occupied.
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row].is_full()
    }

    /// Returns an iterator over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.rows.iter().map(|row| &row.cells)
    }

    /// Returns whether `(col, row)` lies on the board and is empty.
    #[must_use]
    pub fn is_free(&self, (col, row): CellPos) -> bool {
        let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row)) else {
            return false;
        };
        col < BOARD_WIDTH && row < BOARD_HEIGHT && self.is_empty(col, row)
    }

    /// Returns whether every cell of `piece` lies on the board over an empty cell.
    ///
    /// This single predicate backs spawning, moving and rotating.
    #[must_use]
    pub fn is_valid_position(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .into_iter()
            .all(|pos| self.is_free(pos))
    }

    /// Writes the cells of `piece` into the board, tagged with its kind.
    ///
    /// Cells outside the board are skipped.
    pub fn fill_piece(&mut self, piece: &Piece) {
        for (col, row) in piece.occupied_cells() {
            if let (Ok(col), Ok(row)) = (usize::try_from(col), usize::try_from(row))
                && col < BOARD_WIDTH
                && row < BOARD_HEIGHT
            {
                self.occupy(col, row, Cell::Piece(piece.kind()));
            }
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Rows are scanned from the bottom up. When a row is removed, everything above
    /// it moves down by one and an empty row enters at the top; the same index is
    /// then examined again, since it now holds the row that was above it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = BOARD_HEIGHT;
        while row > 0 {
            if self.is_row_full(row - 1) {
                self.remove_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    fn remove_row(&mut self, row: usize) {
        self.rows.copy_within(0..row, 1);
        self.rows[0] = BoardRow::EMPTY;
    }

    /// Creates a board from ASCII art.
    ///
    /// `.` is an empty cell, `#` is a [`Cell::Garbage`] cell and a piece letter
    /// (`I`, `O`, `T`, `S`, `Z`, `J`, `L`) is a cell of that kind. Blank lines are
    /// ignored and the given rows are aligned to the bottom of the board.
    ///
    /// # Panics
    ///
    /// Panics if a row is not exactly 10 cells wide or if more than 20 rows are given.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert!(
            lines.len() <= BOARD_HEIGHT,
            "at most {BOARD_HEIGHT} rows are allowed, got {}",
            lines.len()
        );

        let mut board = Self::EMPTY;
        let top = BOARD_HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let cells: Vec<Cell> = line
                .chars()
                .filter_map(|c| match c {
                    '.' => Some(Cell::Empty),
                    '#' => Some(Cell::Garbage),
                    c => PieceKind::from_char(c).map(Cell::Piece),
                })
                .collect();
            assert_eq!(
                cells.len(),
                BOARD_WIDTH,
                "each row must have exactly {BOARD_WIDTH} cells, got {} at row {i}",
                cells.len()
            );
            board.rows[top + i].cells.copy_from_slice(&cells);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use crate::core::shape::PieceRotation;

    use super::*;

    fn fill_row(board: &mut Board, row: usize) {
        for col in 0..BOARD_WIDTH {
            board.occupy(col, row, Cell::Garbage);
        }
    }

    fn occupied_count(board: &Board) -> usize {
        board
            .rows()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::EMPTY;
        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                assert!(board.is_empty(col, row), "({col}, {row}) should be empty");
            }
            assert!(!board.is_row_full(row));
        }
    }

    #[test]
    fn test_occupy_and_check_cell() {
        let mut board = Board::EMPTY;
        board.occupy(3, 7, Cell::Piece(PieceKind::T));
        assert!(!board.is_empty(3, 7));
        assert_eq!(board.cell(3, 7), Cell::Piece(PieceKind::T));
        assert!(board.is_empty(4, 7));
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::from_ascii("IIIIIIIII.");
        assert!(!board.is_row_full(19));
        board.occupy(9, 19, Cell::Piece(PieceKind::O));
        assert!(board.is_row_full(19));
    }

    #[test]
    fn test_clear_single_row_shifts_content_down() {
        let mut board = Board::from_ascii(
            r"
            ....T.....
            ##########
            ",
        );
        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.cell(4, 19), Cell::Piece(PieceKind::T));
        assert!(board.is_empty(4, 18));
        assert_eq!(occupied_count(&board), 1);
    }

    #[test]
    fn test_clear_four_rows_at_once() {
        let mut board = Board::from_ascii(
            r"
            J.........
            ##########
            ##########
            ##########
            ##########
            ",
        );
        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.cell(0, 19), Cell::Piece(PieceKind::J));
        assert_eq!(occupied_count(&board), 1);
    }

    #[test]
    fn test_clear_cascade_of_separated_rows() {
        // Full rows interleaved with partial rows must all be removed in one pass
        // without skipping the row that moves into a cleared index.
        let mut board = Board::from_ascii(
            r"
            ##########
            S.........
            ##########
            ##########
            Z.........
            ##########
            ",
        );
        assert_eq!(board.clear_full_rows(), 4);
        assert_eq!(board.cell(0, 19), Cell::Piece(PieceKind::Z));
        assert_eq!(board.cell(0, 18), Cell::Piece(PieceKind::S));
        assert_eq!(occupied_count(&board), 2);
        for row in 0..BOARD_HEIGHT {
            assert!(!board.is_row_full(row));
        }
    }

    #[test]
    fn test_clear_conserves_row_count() {
        let mut board = Board::EMPTY;
        for row in 0..BOARD_HEIGHT {
            fill_row(&mut board, row);
        }
        assert_eq!(board.clear_full_rows(), BOARD_HEIGHT);
        assert_eq!(board.rows().count(), BOARD_HEIGHT);
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_clear_with_partial_rows_only() {
        let mut board = Board::from_ascii(
            r"
            #########.
            .#########
            ",
        );
        let before = board.clone();
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_free_rejects_out_of_bounds() {
        let board = Board::EMPTY;
        assert!(board.is_free((0, 0)));
        assert!(board.is_free((9, 19)));
        assert!(!board.is_free((-1, 0)));
        assert!(!board.is_free((10, 0)));
        assert!(!board.is_free((0, -1)));
        assert!(!board.is_free((0, 20)));
    }

    #[test]
    fn test_is_valid_position() {
        let board = Board::from_ascii("....#.....");
        let piece = Piece::new(PieceKind::O, PieceRotation::SPAWN, (0, 18));
        assert!(board.is_valid_position(&piece));
        // overlaps the occupied cell at (4, 19)
        let piece = Piece::new(PieceKind::O, PieceRotation::SPAWN, (3, 18));
        assert!(!board.is_valid_position(&piece));
        // below the floor
        let piece = Piece::new(PieceKind::O, PieceRotation::SPAWN, (0, 19));
        assert!(!board.is_valid_position(&piece));
        // past the left wall
        let piece = Piece::new(PieceKind::O, PieceRotation::SPAWN, (-1, 0));
        assert!(!board.is_valid_position(&piece));
        // past the right wall
        let piece = Piece::new(PieceKind::O, PieceRotation::SPAWN, (9, 0));
        assert!(!board.is_valid_position(&piece));
    }

    #[test]
    fn test_fill_piece_tags_kind() {
        let mut board = Board::EMPTY;
        let piece = Piece::new(PieceKind::L, PieceRotation::SPAWN, (0, 18));
        board.fill_piece(&piece);
        for (col, row) in piece.occupied_cells() {
            let (col, row) = (usize::try_from(col).unwrap(), usize::try_from(row).unwrap());
            assert_eq!(board.cell(col, row), Cell::Piece(PieceKind::L));
        }
        assert_eq!(occupied_count(&board), 4);
    }

    #[test]
    fn test_from_ascii_aligns_to_bottom() {
        let board = Board::from_ascii(
            r"
            I.........
            .........O
            ",
        );
        assert_eq!(board.cell(0, 18), Cell::Piece(PieceKind::I));
        assert_eq!(board.cell(9, 19), Cell::Piece(PieceKind::O));
        assert_eq!(occupied_count(&board), 2);
    }
}
