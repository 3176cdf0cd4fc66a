use std::iter;

use blocktris_engine::{BOARD_HEIGHT, BOARD_WIDTH, Board, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::CellDisplay;

/// The playfield: locked cells, the falling piece and optionally its ghost.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    piece: Option<Piece>,
    ghost: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            piece: None,
            ghost: None,
            block: None,
        }
    }

    pub fn piece(self, piece: Piece) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn ghost(self, ghost: Piece) -> Self {
        Self {
            ghost: Some(ghost),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        BOARD_WIDTH as u16 * CellDisplay::WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        BOARD_HEIGHT as u16 * CellDisplay::HEIGHT
            + super::block_vertical_margin(self.block.as_ref())
    }

    fn cell_at(&self, col: usize, row: usize) -> CellDisplay {
        let covers = |piece: Option<Piece>| {
            piece.is_some_and(|piece| {
                piece.occupied_cells().iter().any(|&(c, r)| {
                    usize::try_from(c) == Ok(col) && usize::try_from(r) == Ok(row)
                })
            })
        };
        if let Some(piece) = self.piece
            && covers(self.piece)
        {
            CellDisplay::piece(piece.kind())
        } else if covers(self.ghost) && self.board.is_empty(col, row) {
            CellDisplay::GHOST
        } else {
            CellDisplay::from_cell(self.board.cell(col, row), true)
        }
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let horizontal = Layout::horizontal([Constraint::Length(CellDisplay::WIDTH); BOARD_WIDTH])
            .flex(Flex::Center);
        let vertical = Layout::vertical([Constraint::Length(CellDisplay::HEIGHT); BOARD_HEIGHT]);

        let grid = area
            .layout::<BOARD_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<BOARD_WIDTH>(&horizontal));
        for (row, grid_row) in grid.enumerate() {
            for (col, grid_cell) in iter::zip(0.., grid_row) {
                self.cell_at(col, row).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blocktris_engine::{Cell, PieceKind};
    use ratatui::widgets::Block;

    use super::*;
    use crate::view::widgets::{color, test_util::row_text};

    fn render(display: &BoardDisplay<'_>) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, display.width(), display.height()));
        display.render(buf.area, &mut buf);
        buf
    }

    #[test]
    fn test_size_includes_border() {
        let board = Board::EMPTY;
        assert_eq!(BoardDisplay::new(&board).width(), 20);
        assert_eq!(BoardDisplay::new(&board).height(), 20);
        let bordered = BoardDisplay::new(&board).block(Block::bordered());
        assert_eq!((bordered.width(), bordered.height()), (22, 22));
    }

    #[test]
    fn test_locked_cells_use_piece_colors() {
        let board = Board::from_ascii("O........#");
        let buf = render(&BoardDisplay::new(&board));
        assert_eq!(buf[(0, 19)].bg, color::YELLOW);
        assert_eq!(buf[(1, 19)].bg, color::YELLOW);
        assert_eq!(buf[(18, 19)].bg, color::GRAY);
        assert_eq!(row_text(&buf, 0), " . . . . . . . . . .");
    }

    #[test]
    fn test_piece_and_ghost_overlay() {
        let board = Board::EMPTY;
        let piece = Piece::spawn(PieceKind::O);
        let ghost = piece.drop_position(&board);
        let buf = render(&BoardDisplay::new(&board).piece(piece).ghost(ghost));

        // O at columns 3 and 4, rows 0-1; ghost on rows 18-19
        assert_eq!(buf[(6, 0)].bg, color::YELLOW);
        assert_eq!(buf[(9, 1)].bg, color::YELLOW);
        assert_eq!(row_text(&buf, 19), " . . .[][] . . . . .");
        assert_eq!(board.cell(3, 19), Cell::Empty);
    }

    #[test]
    fn test_ghost_hidden_under_piece() {
        let board = Board::EMPTY;
        let mut piece = Piece::spawn(PieceKind::I);
        while board.is_valid_position(&piece.down()) {
            piece = piece.down();
        }
        let buf = render(&BoardDisplay::new(&board).piece(piece).ghost(piece));
        assert_eq!(buf[(6, 19)].bg, color::CYAN);
        assert!(!row_text(&buf, 19).contains('['));
    }
}
