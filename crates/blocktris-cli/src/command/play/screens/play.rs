use blocktris_engine::{Command, Engine};
use log::debug;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::{
    input::{Action, KeyBindings},
    view::widgets::{GameDisplay, GameStatus, KeyBindingDisplay},
};

#[derive(Debug)]
pub struct PlayScreen {
    engine: Engine,
    paused: bool,
    show_ghost: bool,
}

impl PlayScreen {
    pub fn new(engine: Engine, show_ghost: bool) -> Self {
        Self {
            engine,
            paused: false,
            show_ghost,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.state().is_game_over()
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Pause => {
                self.paused = !self.paused;
                debug!("paused: {}", self.paused);
            }
            Action::Game(Command::Quit) => {
                self.engine.apply(Command::Quit);
            }
            Action::Game(command) if !self.paused => {
                if let Some(outcome) = self.engine.apply(command)
                    && outcome.cleared_rows > 0
                {
                    debug!(
                        "cleared {} rows for {} points",
                        outcome.cleared_rows, outcome.score_delta
                    );
                }
            }
            Action::Game(_) => {}
        }
    }

    /// Advances gravity by one tick unless paused.
    pub fn update(&mut self) {
        if !self.paused {
            self.engine.tick();
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>, bindings: &KeyBindings) {
        let status = if self.is_paused() {
            GameStatus::Paused
        } else {
            GameStatus::Playing
        };
        let snapshot = self.engine.snapshot();
        let game = GameDisplay::new(&snapshot, status).show_ghost(self.show_ghost);
        let legend = KeyBindingDisplay::new(bindings.legend());

        let [game_area, legend_area] =
            Layout::vertical([Constraint::Length(22), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(&game, game_area);
        frame.render_widget(legend, legend_area);
    }
}
