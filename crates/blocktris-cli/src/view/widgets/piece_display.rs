use blocktris_engine::{PieceKind, PieceRotation};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::CellDisplay;

/// A single piece in its spawn orientation, used for the next-piece panel.
#[derive(Debug)]
pub struct PieceDisplay<'a> {
    kind: PieceKind,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new(kind: PieceKind) -> Self {
        Self { kind, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * CellDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * CellDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        let kind = self.kind;

        let rotation = PieceRotation::SPAWN;
        let (width, height) = kind.extent(rotation);
        // every spawn shape starts on row 0 except I, which sits on row 1
        let top = kind
            .offsets(rotation)
            .iter()
            .map(|&(_, row)| row)
            .min()
            .unwrap_or(0);
        let (cols, rows) = (
            u16::try_from(width).unwrap_or(0),
            u16::try_from(height - top).unwrap_or(0),
        );
        let piece_area = area.centered(
            Constraint::Length(cols * CellDisplay::WIDTH),
            Constraint::Length(rows * CellDisplay::HEIGHT),
        );

        let horizontal =
            Layout::horizontal((0..cols).map(|_| Constraint::Length(CellDisplay::WIDTH)));
        let vertical = Layout::vertical((0..rows).map(|_| Constraint::Length(CellDisplay::HEIGHT)));
        let occupied = CellDisplay::piece(kind);
        for (row, grid_row) in (top..).zip(piece_area.layout_vec(&vertical)) {
            for (col, grid_cell) in (0..).zip(grid_row.layout_vec(&horizontal)) {
                if kind.is_occupied(rotation, (col, row)) {
                    occupied.render(grid_cell, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::widgets::color;

    fn render(kind: PieceKind) -> Buffer {
        let display = PieceDisplay::new(kind);
        let mut buf = Buffer::empty(Rect::new(0, 0, display.width(), display.height()));
        display.render(buf.area, &mut buf);
        buf
    }

    #[test]
    fn test_i_piece_fills_one_row() {
        let buf = render(PieceKind::I);
        let cyan_rows: Vec<u16> = (0..2)
            .filter(|&y| (0..8).all(|x| buf[(x, y)].bg == color::CYAN))
            .collect();
        assert_eq!(cyan_rows.len(), 1);
        let other = 1 - cyan_rows[0];
        assert!((0..8).all(|x| buf[(x, other)].bg != color::CYAN));
    }

    #[test]
    fn test_t_piece_is_centered() {
        let buf = render(PieceKind::T);
        // 3 cells wide in a 4 cell panel: one column of padding on the left
        assert_eq!(buf[(3, 0)].bg, color::MAGENTA);
        assert_ne!(buf[(1, 0)].bg, color::MAGENTA);
        for x in 1..7 {
            assert_eq!(buf[(x, 1)].bg, color::MAGENTA, "x={x}");
        }
    }
}
