use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::event::LoopEvent;

/// Default upper bound on a single input poll.
pub(crate) const DEFAULT_IDLE_CAP: Duration = Duration::from_millis(10);

/// When renders happen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Render at a fixed interval.
    Interval(Duration),
    /// Render once after every tick or terminal event.
    #[default]
    OnDirty,
}

impl RenderMode {
    /// Creates `Interval` mode from a frame rate in frames per second.
    #[must_use]
    pub fn interval_from_rate(rate: f64) -> Self {
        Self::Interval(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Wall-clock bookkeeping for ticks and renders.
///
/// Pure with respect to time: every method takes `now`, so the schedule can be
/// driven by synthetic instants.
#[derive(Debug)]
pub(crate) struct Schedule {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    idle_cap: Duration,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Schedule {
    /// Creates a schedule with no tick, `OnDirty` rendering and one render pending.
    pub(crate) fn new(now: Instant) -> Self {
        let long_ago = now.checked_sub(Duration::from_secs(86400)).unwrap_or(now);
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            idle_cap: DEFAULT_IDLE_CAP,
            last_tick: long_ago,
            last_render: long_ago,
            dirty: true,
        }
    }

    pub(crate) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    pub(crate) fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub(crate) fn set_idle_cap(&mut self, idle_cap: Duration) {
        self.idle_cap = idle_cap;
    }

    pub(crate) fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the tick or render due at `now`, recording it as done.
    ///
    /// A due tick wins over a due render.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<LoopEvent> {
        if let Some(interval) = self.tick_interval
            && now.duration_since(self.last_tick) >= interval
        {
            // keep the cadence fixed unless we fell more than one interval behind
            let next = self.last_tick + interval;
            self.last_tick = if now.duration_since(next) < interval {
                next
            } else {
                now
            };
            self.dirty = true;
            return Some(LoopEvent::Tick);
        }

        let render_due = match self.render_mode {
            RenderMode::Interval(interval) => now.duration_since(self.last_render) >= interval,
            RenderMode::OnDirty => self.dirty,
        };
        if render_due {
            self.last_render = now;
            self.dirty = false;
            return Some(LoopEvent::Render);
        }
        None
    }

    /// Returns how long to wait for input at `now`.
    ///
    /// This is the time until the next tick or render, never longer than the idle cap.
    pub(crate) fn poll_timeout(&self, now: Instant) -> Duration {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = match self.render_mode {
            RenderMode::Interval(interval) => Some(self.last_render + interval),
            RenderMode::OnDirty => self.dirty.then_some(now),
        };
        [next_tick_at, next_render_at]
            .into_iter()
            .flatten()
            .min()
            .map_or(self.idle_cap, |at| {
                at.saturating_duration_since(now).min(self.idle_cap)
            })
    }
}

/// Produces the next [`LoopEvent`] from the schedule and the terminal.
#[derive(Debug)]
pub(crate) struct EventLoop {
    schedule: Schedule,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self {
            schedule: Schedule::new(Instant::now()),
        }
    }
}

impl EventLoop {
    pub(crate) fn schedule_mut(&mut self) -> &mut Schedule {
        &mut self.schedule
    }

    pub(crate) fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Blocks until a tick or render is due or a terminal event arrives.
    pub(crate) fn next(&mut self) -> io::Result<LoopEvent> {
        loop {
            let now = Instant::now();
            if let Some(due) = self.schedule.take_due(now) {
                return Ok(due);
            }
            if event::poll(self.schedule.poll_timeout(now))? {
                self.schedule.mark_dirty();
                return Ok(event::read()?.into());
            }
        }
    }
}
