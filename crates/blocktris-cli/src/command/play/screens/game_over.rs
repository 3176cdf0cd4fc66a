use blocktris_engine::{Engine, GameSummary};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::Line,
};

use crate::view::widgets::{GameDisplay, GameStatus, color};

/// Final board with the result; any key leaves.
#[derive(Debug)]
pub struct GameOverScreen {
    engine: Engine,
    dismissed: bool,
}

impl GameOverScreen {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            dismissed: false,
        }
    }

    pub fn summary(&self) -> GameSummary {
        self.engine.summary()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let snapshot = self.engine.snapshot();
        let summary = self.summary();
        let [game_area, result_area, hint_area] = Layout::vertical([
            Constraint::Length(22),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            &GameDisplay::new(&snapshot, GameStatus::GameOver),
            game_area,
        );
        frame.render_widget(
            Line::from(format!(
                "Score {}  Level {}  Lines {}",
                summary.score, summary.level, summary.lines
            ))
            .centered(),
            result_area,
        );
        frame.render_widget(
            Line::styled("press any key to exit", Style::new().fg(color::GRAY)).centered(),
            hint_area,
        );
    }
}
