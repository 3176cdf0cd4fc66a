use serde::Serialize;

use crate::{Board, GameStats, Piece, PieceKind, PieceSeed};

/// Read-only view of an engine, borrowed for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    /// The falling piece. After a blocked spawn this is the piece that did not fit.
    pub piece: Piece,
    /// Where `piece` would rest if hard-dropped.
    pub drop_position: Piece,
    /// The previewed next kind, `None` when the preview is disabled.
    pub next: Option<PieceKind>,
    pub stats: &'a GameStats,
    pub game_over: bool,
    pub drop_counter: u64,
}

impl Snapshot<'_> {
    #[must_use]
    pub fn score(&self) -> u64 {
        self.stats.score()
    }

    #[must_use]
    pub fn level(&self) -> u64 {
        self.stats.level()
    }
}

/// Owned end-of-game record, printed by the CLI or serialized as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::Display)]
#[display("score {score}, level {level}, lines {lines}, pieces {pieces}")]
pub struct GameSummary {
    pub score: u64,
    pub level: u64,
    pub lines: u64,
    pub pieces: u64,
    /// Locks by number of rows cleared, index `0..=4`.
    pub line_clears: [u64; 5],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<PieceSeed>,
}

impl GameSummary {
    #[must_use]
    pub fn new(stats: &GameStats, seed: Option<PieceSeed>) -> Self {
        Self {
            score: stats.score(),
            level: stats.level(),
            lines: stats.cleared_rows(),
            pieces: stats.locked_pieces(),
            line_clears: *stats.line_clear_counter(),
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_stats() {
        let mut stats = GameStats::new();
        stats.record_lock(2);
        stats.record_lock(0);
        let summary = GameSummary::new(&stats, None);
        assert_eq!(summary.score, 400);
        assert_eq!(summary.level, 1);
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.pieces, 2);
        assert_eq!(summary.line_clears, [1, 0, 1, 0, 0]);
        assert_eq!(summary.to_string(), "score 400, level 1, lines 2, pieces 2");
    }

    #[test]
    fn test_summary_json() {
        let stats = GameStats::new();
        let json = serde_json::to_value(GameSummary::new(&stats, None)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "score": 0,
                "level": 1,
                "lines": 0,
                "pieces": 0,
                "line_clears": [0, 0, 0, 0, 0],
            })
        );

        let seed = PieceSeed::from_bytes([0xab; 16]);
        let json = serde_json::to_value(GameSummary::new(&stats, Some(seed))).unwrap();
        assert_eq!(json["seed"], "abababababababababababababababab");
    }
}
