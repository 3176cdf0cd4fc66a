use crossterm::event::Event as CrosstermEvent;

/// One step of the runtime loop.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant, derive_more::From)]
pub(crate) enum LoopEvent {
    /// The tick interval elapsed.
    Tick,
    /// A render is due.
    Render,
    /// Key input, resize and other terminal events.
    Crossterm(CrosstermEvent),
}
