use blocktris_engine::{Engine, GameSummary};
use crossterm::event::KeyEvent;
use log::info;
use ratatui::Frame;

use crate::input::KeyBindings;

pub use self::{game_over::GameOverScreen, play::PlayScreen};

mod game_over;
mod play;

#[derive(Debug, derive_more::IsVariant)]
pub enum Screen {
    Play(PlayScreen),
    GameOver(GameOverScreen),
}

impl Screen {
    pub fn play(engine: Engine, show_ghost: bool) -> Self {
        Screen::Play(PlayScreen::new(engine, show_ghost))
    }

    pub fn should_exit(&self) -> bool {
        match self {
            Screen::Play(_) => false,
            Screen::GameOver(screen) => screen.is_dismissed(),
        }
    }

    pub fn summary(&self) -> GameSummary {
        match self {
            Screen::Play(screen) => screen.engine().summary(),
            Screen::GameOver(screen) => screen.summary(),
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent, bindings: &KeyBindings) {
        match self {
            Screen::Play(screen) => {
                if let Some(action) = bindings.action(event) {
                    screen.handle_action(action);
                }
            }
            Screen::GameOver(screen) => screen.dismiss(),
        }
        self.advance();
    }

    pub fn update(&mut self) {
        if let Screen::Play(screen) = self {
            screen.update();
        }
        self.advance();
    }

    pub fn draw(&self, frame: &mut Frame<'_>, bindings: &KeyBindings) {
        match self {
            Screen::Play(screen) => screen.draw(frame, bindings),
            Screen::GameOver(screen) => screen.draw(frame),
        }
    }

    /// Moves a finished game to the game-over screen.
    fn advance(&mut self) {
        let finished = match self {
            Screen::Play(screen) if screen.is_game_over() => Some(screen.engine().clone()),
            _ => None,
        };
        if let Some(engine) = finished {
            info!("game finished: {}", engine.summary());
            *self = Screen::GameOver(GameOverScreen::new(engine));
        }
    }
}
