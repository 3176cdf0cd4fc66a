//! Game rules built on top of the core data structures.
//!
//! - [`Engine`] - Owns the board, the falling piece and the statistics; executes
//!   spawn, move, rotate, drop, lock, line clear, scoring and gravity
//! - [`PieceSource`] - Where piece kinds come from ([`RandomPieces`], [`ScriptedPieces`])
//! - [`GameStats`] - Score, level and clear counters
//! - [`Command`] - Discrete player input
//! - [`Snapshot`] / [`GameSummary`] - Read-only views for presentation
//!
//! # Game Flow
//!
//! 1. Create an [`Engine`]; the first piece spawns at the top center
//! 2. Feed [`Command`]s and call [`Engine::tick`] at a fixed cadence
//! 3. A piece that cannot fall further is locked, full rows are cleared and scored
//! 4. The next piece spawns; if it does not fit, the game is over
//!
//! ```
//! use blocktris_engine::{Command, Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default());
//! engine.apply(Command::Rotate);
//! engine.apply(Command::HardDrop);
//! assert_eq!(engine.stats().locked_pieces(), 1);
//!
//! engine.apply(Command::Quit);
//! assert!(engine.state().is_game_over());
//! ```

pub use self::{command::*, game_engine::*, game_stats::*, piece_source::*, snapshot::*};

mod command;
mod game_engine;
mod game_stats;
mod piece_source;
mod snapshot;
