use serde::Serialize;

/// Points per cleared row; a lock clearing `n` rows scores `n * n * ROW_CLEAR_POINTS`.
pub const ROW_CLEAR_POINTS: u64 = 100;

/// Score needed per level step.
pub const POINTS_PER_LEVEL: u64 = 1000;

/// Game statistics tracking score, level, cleared rows and locked pieces.
///
/// # Scoring
///
/// A lock that clears `n > 0` rows adds `n * n * 100` points, so one four-row
/// clear (1600) is worth far more than four single clears (400). The level is
/// recomputed from the score after every scoring lock as `score / 1000 + 1`, and
/// is never changed any other way.
///
/// # Example
///
/// ```
/// use blocktris_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// assert_eq!(stats.record_lock(4), 1600);
///
/// assert_eq!(stats.score(), 1600);
/// assert_eq!(stats.level(), 2);
/// assert_eq!(stats.line_clear_counter()[4], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameStats {
    score: u64,
    level: u64,
    locked_pieces: u64,
    cleared_rows: u64,
    line_clear_counter: [u64; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a tracker at score 0 and level 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            locked_pieces: 0,
            cleared_rows: 0,
            line_clear_counter: [0; 5],
        }
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub const fn level(&self) -> u64 {
        self.level
    }

    /// Returns the total number of pieces locked into the board.
    #[must_use]
    pub const fn locked_pieces(&self) -> u64 {
        self.locked_pieces
    }

    /// Returns the total number of rows removed.
    #[must_use]
    pub const fn cleared_rows(&self) -> u64 {
        self.cleared_rows
    }

    /// Returns a histogram of locks by number of rows cleared.
    ///
    /// Index `0` counts locks that cleared nothing, index `4` counts four-row clears.
    #[must_use]
    pub const fn line_clear_counter(&self) -> &[u64; 5] {
        &self.line_clear_counter
    }

    /// Records one lock that removed `cleared` rows and returns the points awarded.
    pub fn record_lock(&mut self, cleared: usize) -> u64 {
        let cleared = cleared as u64;
        self.locked_pieces += 1;
        self.cleared_rows += cleared;
        if let Some(count) = usize::try_from(cleared)
            .ok()
            .and_then(|i| self.line_clear_counter.get_mut(i))
        {
            *count += 1;
        }
        if cleared == 0 {
            return 0;
        }
        let points = cleared * cleared * ROW_CLEAR_POINTS;
        self.score += points;
        self.level = level_for_score(self.score);
        points
    }
}

/// Returns the level reached at `score`.
#[must_use]
pub const fn level_for_score(score: u64) -> u64 {
    score / POINTS_PER_LEVEL + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_stats() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.level(), 1);
        assert_eq!(stats.locked_pieces(), 0);
        assert_eq!(stats.cleared_rows(), 0);
    }

    #[test]
    fn test_quadratic_points() {
        for (rows, expected) in [(1, 100), (2, 400), (3, 900), (4, 1600)] {
            let mut stats = GameStats::new();
            assert_eq!(stats.record_lock(rows), expected);
            assert_eq!(stats.score(), expected);
        }
    }

    #[test]
    fn test_lock_without_clear_scores_nothing() {
        let mut stats = GameStats::new();
        assert_eq!(stats.record_lock(0), 0);
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.level(), 1);
        assert_eq!(stats.locked_pieces(), 1);
        assert_eq!(stats.line_clear_counter()[0], 1);
    }

    #[test]
    fn test_level_follows_score() {
        let mut stats = GameStats::new();
        for rows in [1, 3, 2, 4, 4, 1, 2, 3, 4, 4] {
            stats.record_lock(rows);
            assert_eq!(stats.level(), stats.score() / 1000 + 1);
        }
        assert_eq!(stats.cleared_rows(), 28);
        assert_eq!(stats.line_clear_counter(), &[0, 2, 2, 2, 4]);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(999), 1);
        assert_eq!(level_for_score(1000), 2);
        assert_eq!(level_for_score(12_345), 13);
    }

    #[test]
    fn test_oversized_clear_skips_histogram() {
        let mut stats = GameStats::new();
        assert_eq!(stats.record_lock(5), 2500);
        assert_eq!(stats.line_clear_counter(), &[0; 5]);
        assert_eq!(stats.cleared_rows(), 5);
    }
}
