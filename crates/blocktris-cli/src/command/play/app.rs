use std::time::Duration;

use blocktris_engine::{Engine, GameSummary};
use blocktris_runtime::{App, RenderMode, Runtime};
use crossterm::event::Event;
use log::info;
use ratatui::Frame;

use crate::{command::play::screens::Screen, config::Config, input};

#[derive(Debug)]
pub struct PlayApp {
    screen: Screen,
    bindings: input::KeyBindings,
    gravity_rate: f64,
    frame_rate: f64,
    idle_cap: Duration,
    interrupted: bool,
}

impl PlayApp {
    pub fn new(engine: Engine, config: &Config) -> Self {
        Self {
            screen: Screen::play(engine, config.ghost),
            bindings: input::KeyBindings::new(&config.keys),
            gravity_rate: config.gravity_rate,
            frame_rate: config.frame_rate,
            idle_cap: config.idle_cap(),
            interrupted: false,
        }
    }

    pub fn summary(&self) -> GameSummary {
        self.screen.summary()
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.gravity_rate));
        runtime.set_render_mode(RenderMode::interval_from_rate(self.frame_rate));
        runtime.set_idle_cap(self.idle_cap);
    }

    fn should_exit(&self) -> bool {
        self.interrupted || self.screen.should_exit()
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        let Some(key) = event.as_key_press_event() else {
            return;
        };
        if input::is_interrupt(&key) {
            info!("interrupted");
            self.interrupted = true;
            return;
        }
        self.screen.handle_key(&key, &self.bindings);
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.screen.update();
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame, &self.bindings);
    }
}
