pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error returned when a [`PieceSeed`] cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePieceSeedError {
    #[display("piece seed must be {expected} hex digits, got {len}")]
    InvalidLength { expected: usize, len: usize },
    #[display("piece seed contains a non-hex character: {input:?}")]
    InvalidDigit { input: String },
}
