use std::{io, time::Duration};

use log::debug;

use crate::{
    App,
    event::LoopEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Runs an [`App`] inside the terminal.
///
/// The tick interval, render mode and idle cap can be changed at any time, from
/// [`App::init`] or while handling events.
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tick rate in ticks per second. `None` disables ticks.
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.schedule_mut().set_tick_interval(interval);
    }

    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        self.events.schedule().tick_interval()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.schedule_mut().set_render_mode(mode);
    }

    /// Sets the longest single wait for terminal input.
    pub fn set_idle_cap(&mut self, idle_cap: Duration) {
        self.events.schedule_mut().set_idle_cap(idle_cap);
    }

    /// Runs `app` until [`App::should_exit`] returns `true`.
    ///
    /// The terminal is restored on return, including when an error is returned.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);
        debug!("runtime started, tick interval {:?}", self.tick_interval());

        let result = ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    LoopEvent::Tick => app.update(&mut self),
                    LoopEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    LoopEvent::Crossterm(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        });
        debug!("runtime stopped");
        result
    }
}
