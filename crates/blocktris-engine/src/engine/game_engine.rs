use log::{debug, info};

use crate::{
    Board, Command, GameStats, GameSummary, Piece, PieceKind, PieceSeed, PieceSource,
    RandomPieces, Snapshot,
};

/// Base gravity delay, in ticks, that [`GRAVITY_STEP`] is subtracted from once per level.
pub const BASE_GRAVITY_DELAY: u64 = 30;
/// Ticks removed from the gravity delay per level.
pub const GRAVITY_STEP: u64 = 3;
/// Shortest gravity delay, in ticks.
pub const MIN_GRAVITY_DELAY: u64 = 5;

/// Returns the number of ticks between gravity steps at `level`.
///
/// ```
/// use blocktris_engine::gravity_delay_for_level;
///
/// assert_eq!(gravity_delay_for_level(1), 27);
/// assert_eq!(gravity_delay_for_level(20), 5);
/// ```
#[must_use]
pub const fn gravity_delay_for_level(level: u64) -> u64 {
    let delay = BASE_GRAVITY_DELAY.saturating_sub(level.saturating_mul(GRAVITY_STEP));
    if delay < MIN_GRAVITY_DELAY {
        MIN_GRAVITY_DELAY
    } else {
        delay
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum GameState {
    #[default]
    Running,
    /// Terminal state. Every mutating operation is a no-op.
    GameOver,
}

/// Engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Keep one kind drawn ahead and expose it through [`Engine::next`].
    pub preview: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { preview: true }
    }
}

/// What a lock did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    pub cleared_rows: usize,
    pub score_delta: u64,
    /// The following spawn did not fit and the game is over.
    pub spawn_blocked: bool,
}

/// The game engine.
///
/// Owns the board, the falling piece, the piece source and the statistics. All
/// operations are total: invalid candidate positions are discarded, and a blocked
/// spawn ends the game instead of failing.
///
/// # Example
///
/// ```
/// use blocktris_engine::{Engine, EngineConfig, PieceKind, ScriptedPieces};
///
/// let source = ScriptedPieces::new([PieceKind::O, PieceKind::T]);
/// let mut engine = Engine::with_source(EngineConfig::default(), source);
/// assert_eq!(engine.next(), Some(PieceKind::T));
///
/// engine.move_left();
/// let outcome = engine.hard_drop().unwrap();
/// assert_eq!(outcome.cleared_rows, 0);
/// assert_eq!(engine.piece().kind(), PieceKind::T);
/// assert!(engine.state().is_running());
/// ```
#[derive(Debug, Clone)]
pub struct Engine<S = RandomPieces> {
    config: EngineConfig,
    board: Board,
    piece: Piece,
    next: Option<PieceKind>,
    source: S,
    stats: GameStats,
    drop_counter: u64,
    state: GameState,
}

impl Engine<RandomPieces> {
    /// Creates an engine with a freshly seeded random piece source.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_source(config, RandomPieces::new())
    }

    /// Creates an engine whose piece sequence is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(config: EngineConfig, seed: PieceSeed) -> Self {
        Self::with_source(config, RandomPieces::with_seed(seed))
    }
}

impl<S> Engine<S>
where
    S: PieceSource,
{
    #[must_use]
    pub fn with_source(config: EngineConfig, source: S) -> Self {
        Self::with_board(config, source, Board::EMPTY)
    }

    /// Starts a game on a pre-filled board.
    ///
    /// The first piece is spawned immediately, so a board blocking the spawn area
    /// yields an engine that is already over.
    #[must_use]
    pub fn with_board(config: EngineConfig, mut source: S, board: Board) -> Self {
        let first = source.next_kind();
        let next = config.preview.then(|| source.next_kind());
        let mut engine = Self {
            config,
            board,
            piece: Piece::spawn(first),
            next,
            source,
            stats: GameStats::new(),
            drop_counter: 0,
            state: GameState::Running,
        };
        engine.place_spawned(Piece::spawn(first));
        engine
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Returns the previewed next kind, `None` when the preview is disabled.
    #[must_use]
    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn drop_counter(&self) -> u64 {
        self.drop_counter
    }

    /// Returns the number of ticks between gravity steps at the current level.
    #[must_use]
    pub fn gravity_delay(&self) -> u64 {
        gravity_delay_for_level(self.stats.level())
    }

    /// Returns where the falling piece would rest if hard-dropped.
    #[must_use]
    pub fn drop_position(&self) -> Piece {
        self.piece.drop_position(&self.board)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            piece: self.piece,
            drop_position: self.drop_position(),
            next: self.next,
            stats: &self.stats,
            game_over: self.state.is_game_over(),
            drop_counter: self.drop_counter,
        }
    }

    /// Returns the seed of the piece source, if it has one.
    #[must_use]
    pub fn seed(&self) -> Option<PieceSeed> {
        self.source.seed()
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary::new(&self.stats, self.seed())
    }

    /// Replaces the falling piece with a new one at the spawn origin.
    ///
    /// With the preview enabled the new piece takes the previewed kind and a new
    /// kind is drawn ahead. A spawn that does not fit ends the game.
    pub fn spawn_new_piece(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        let kind = match self.next {
            Some(next) => {
                self.next = Some(self.source.next_kind());
                next
            }
            None => self.source.next_kind(),
        };
        self.place_spawned(Piece::spawn(kind));
    }

    fn place_spawned(&mut self, piece: Piece) {
        self.piece = piece;
        if self.board.is_valid_position(&piece) {
            debug!("spawned {piece}");
        } else {
            self.state = GameState::GameOver;
            info!(
                "game over: spawn of {piece} blocked (score {}, level {})",
                self.stats.score(),
                self.stats.level()
            );
        }
    }

    /// Commits `candidate` if it fits the board.
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.state.is_game_over() || !self.board.is_valid_position(&candidate) {
            return false;
        }
        self.piece = candidate;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_commit(self.piece.left())
    }

    pub fn move_right(&mut self) -> bool {
        self.try_commit(self.piece.right())
    }

    /// Advances the rotation by one state. There are no wall kicks: a rotation
    /// that does not fit in place is discarded.
    pub fn rotate(&mut self) -> bool {
        self.try_commit(self.piece.rotated())
    }

    /// Moves the piece one row down. Returns `false` when it has landed.
    pub fn move_down(&mut self) -> bool {
        self.try_commit(self.piece.down())
    }

    /// Drops the piece as far as it goes, then locks it and spawns the next one.
    pub fn hard_drop(&mut self) -> Option<LockOutcome> {
        if self.state.is_game_over() {
            return None;
        }
        self.piece = self.drop_position();
        self.lock_and_advance()
    }

    /// Writes the piece into the board, clears full rows, scores and spawns.
    pub fn lock_and_advance(&mut self) -> Option<LockOutcome> {
        if self.state.is_game_over() {
            return None;
        }
        let piece = self.piece;
        self.board.fill_piece(&piece);
        let cleared_rows = self.board.clear_full_rows();
        let score_delta = self.stats.record_lock(cleared_rows);
        debug!("locked {piece}, cleared {cleared_rows}, +{score_delta}");

        self.spawn_new_piece();
        Some(LockOutcome {
            cleared_rows,
            score_delta,
            spawn_blocked: self.state.is_game_over(),
        })
    }

    /// Advances gravity by one tick.
    ///
    /// Every [`gravity_delay`](Self::gravity_delay) ticks the piece moves down one
    /// row, or locks if it cannot. Returns the lock outcome when a lock happened.
    pub fn tick(&mut self) -> Option<LockOutcome> {
        if self.state.is_game_over() {
            return None;
        }
        self.drop_counter += 1;
        if self.drop_counter < self.gravity_delay() {
            return None;
        }
        let outcome = if self.move_down() {
            None
        } else {
            self.lock_and_advance()
        };
        self.drop_counter = 0;
        outcome
    }

    /// Ends the game.
    pub fn quit(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        self.state = GameState::GameOver;
        info!(
            "game over: quit (score {}, level {})",
            self.stats.score(),
            self.stats.level()
        );
    }

    /// Runs `command`, returning the lock outcome if it locked a piece.
    pub fn apply(&mut self, command: Command) -> Option<LockOutcome> {
        match command {
            Command::MoveLeft => {
                self.move_left();
            }
            Command::MoveRight => {
                self.move_right();
            }
            Command::Rotate => {
                self.rotate();
            }
            Command::HardDrop => return self.hard_drop(),
            Command::Quit => self.quit(),
        }
        None
    }
}
