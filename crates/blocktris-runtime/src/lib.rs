//! Terminal event loop for fixed-cadence games.
//!
//! [`Runtime::run`] drives an [`App`]: gravity ticks arrive at a fixed interval,
//! renders follow the [`RenderMode`], and keyboard input is polled in between with
//! a timeout capped by the idle wait.

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
