use blocktris_engine::Snapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// What the playfield frame is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

/// Board with its side panels: stats on the left, next piece on the right.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    snapshot: &'a Snapshot<'a>,
    status: GameStatus,
    show_ghost: bool,
}

impl<'a> GameDisplay<'a> {
    pub fn new(snapshot: &'a Snapshot<'a>, status: GameStatus) -> Self {
        Self {
            snapshot,
            status,
            show_ghost: false,
        }
    }

    pub fn show_ghost(self, show_ghost: bool) -> Self {
        Self { show_ghost, ..self }
    }

    fn border_color(&self) -> Color {
        match self.status {
            GameStatus::Playing => color::WHITE,
            GameStatus::Paused => color::YELLOW,
            GameStatus::GameOver => color::RED,
        }
    }

    fn panel(&self, title: &'static str) -> Block<'static> {
        Block::bordered()
            .title(Line::from(title).centered())
            .padding(Padding::horizontal(1))
            .border_style(self.border_color())
            .style(style::DEFAULT)
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot;

        let mut board = BoardDisplay::new(snapshot.board).block(
            Block::bordered()
                .border_style(self.border_color())
                .style(style::DEFAULT),
        );
        if !snapshot.game_over {
            board = board.piece(snapshot.piece);
            if self.show_ghost {
                board = board.ghost(snapshot.drop_position);
            }
        }
        let stats = StatsDisplay::new(snapshot).block(self.panel("STATS"));
        let next = snapshot
            .next
            .map(|kind| PieceDisplay::new(kind).block(self.panel("NEXT")));
        let next_width = next.as_ref().map_or(0, PieceDisplay::width);

        let [stats_column, board_column, next_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
            Constraint::Length(next_width),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(stats_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(board_column);
        let board_width = board.width();

        stats.render(stats_area, buf);
        board.render(board_area, buf);
        if let Some(next) = next {
            let [next_area] =
                Layout::vertical([Constraint::Length(next.height())]).areas(next_column);
            next.render(next_area, buf);
        }

        let popup = match self.status {
            GameStatus::Playing => None,
            GameStatus::Paused => Some(("PAUSED", style::PAUSED_POPUP)),
            GameStatus::GameOver => Some(("GAME OVER", style::GAME_OVER_POPUP)),
        };
        if let Some((text, popup_style)) = popup {
            render_popup(board_area, board_width, text, popup_style, buf);
        }
    }
}

fn render_popup(board_area: Rect, width: u16, text: &str, style: Style, buf: &mut Buffer) {
    let block = Block::new().style(style);
    let area = board_area.centered(Constraint::Length(width), Constraint::Length(3));
    let inner = block.inner(area);
    Clear.render(area, buf);
    block.render(area, buf);
    Text::styled(text, style)
        .centered()
        .render(inner.centered_vertically(Constraint::Length(1)), buf);
}
