use blocktris_engine::{Cell, PieceKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One board cell drawn as a two-column glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub const WIDTH: u16 = 2;
    pub const HEIGHT: u16 = 1;

    pub const GHOST: Self = Self::new(style::GHOST, "[]");

    const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub const fn empty(show_dots: bool) -> Self {
        if show_dots {
            Self::new(style::EMPTY_DOT, " .")
        } else {
            Self::new(style::EMPTY, "")
        }
    }

    pub const fn piece(kind: PieceKind) -> Self {
        Self::new(style::piece(kind), "")
    }

    pub const fn from_cell(cell: Cell, show_dots: bool) -> Self {
        match cell {
            Cell::Empty => Self::empty(show_dots),
            Cell::Garbage => Self::new(style::GARBAGE, ""),
            Cell::Piece(kind) => Self::piece(kind),
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // a Paragraph fills the whole area with the style, not only the symbol cells
        Paragraph::new(self.symbol)
            .style(self.style)
            .render(area, buf);
    }
}
