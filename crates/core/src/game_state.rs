//! Game state module - the controller that owns the board and the falling piece
//!
//! Gravity is time-gated: `update` is called every frame with a monotonic
//! tick, but only advances the piece once more than `fall_delay_ms` has
//! passed since the last gravity tick. Input actions mutate the falling piece
//! directly between ticks.
//!
//! While the game is running, every public call leaves the falling piece
//! fully inside the board and clear of placed cells.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::pieces::Piece;
use crate::rng::PieceFactory;
use crate::snapshot::{FallingSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    falling: Piece,
    factory: PieceFactory<R>,
    fall_delay_ms: u64,
    last_fall_ms: u64,
    lines: u32,
    pieces_spawned: u32,
    paused: bool,
    game_over: bool,
}

impl GameState<StdRng> {
    /// Create a new game whose pieces are drawn from a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_factory(PieceFactory::seeded(seed))
    }

    /// Create a game from runtime settings
    pub fn from_config(config: &GameConfig) -> Self {
        let factory = match config.seed {
            Some(seed) => PieceFactory::seeded(seed),
            None => PieceFactory::from_entropy(),
        };
        let mut state = Self::with_factory(factory);
        state.fall_delay_ms = config.fall_delay_ms;
        state
    }
}

impl<R: Rng> GameState<R> {
    /// Create a new game drawing pieces from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self::with_factory(PieceFactory::new(rng))
    }

    fn with_factory(mut factory: PieceFactory<R>) -> Self {
        let falling = factory.create_random_piece();
        debug!("spawned {:?} at ({}, {})", falling.kind, falling.x, falling.y);

        Self {
            board: Board::new(),
            falling,
            factory,
            fall_delay_ms: FALL_DELAY_MS,
            last_fall_ms: 0,
            lines: 0,
            pieces_spawned: 1,
            paused: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (tests, puzzles).
    ///
    /// Callers are responsible for keeping the falling piece clear of the
    /// cells they add.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn falling(&self) -> &Piece {
        &self.falling
    }

    /// Swap in a specific falling piece (scripted setups).
    ///
    /// The piece is pushed back inside the walls like any other move. A piece
    /// that lands on placed cells cannot be committed and ends the game on
    /// its next gravity step.
    pub fn replace_falling(&mut self, piece: Piece) {
        self.falling = piece;
        self.correct_edges();
    }

    pub fn fall_delay_ms(&self) -> u64 {
        self.fall_delay_ms
    }

    pub fn last_fall_ms(&self) -> u64 {
        self.last_fall_ms
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let width = BOARD_WIDTH as usize;
        for (idx, square) in self.board.squares().iter().enumerate() {
            out.board[idx / width][idx % width] = *square;
        }
        out.falling = Some(FallingSnapshot::from(self.falling));
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Any falling cell sits on a placed cell
    fn overlaps_stack(&self) -> bool {
        self.falling
            .board_cells()
            .iter()
            .any(|&(x, y)| self.board.is_occupied(x, y))
    }

    /// Push the falling piece back inside the board.
    ///
    /// Each wall is corrected by the full overshoot of the furthest cell.
    fn correct_edges(&mut self) {
        let cells = self.falling.board_cells();
        let min_x = cells.iter().map(|c| c.0).min().unwrap_or(0);
        let max_x = cells.iter().map(|c| c.0).max().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.1).min().unwrap_or(0);
        let max_y = cells.iter().map(|c| c.1).max().unwrap_or(0);

        if min_x < 0 {
            self.falling.x -= min_x;
        } else if max_x >= BOARD_WIDTH {
            self.falling.x -= max_x - (BOARD_WIDTH - 1);
        }

        if min_y < 0 {
            self.falling.y -= min_y;
        } else if max_y >= BOARD_HEIGHT {
            self.falling.y -= max_y - (BOARD_HEIGHT - 1);
        }
    }

    /// Copy the falling piece's cells onto the board.
    ///
    /// Returns `None` and leaves the board untouched if any cell is taken.
    fn commit_falling(&mut self) -> Option<PieceKind> {
        let piece = self.falling;
        if !self.board.place_cells(&piece.board_cells(), piece.color()) {
            warn!("could not commit {:?} at ({}, {})", piece.kind, piece.x, piece.y);
            return None;
        }
        debug!(
            "committed {:?} at ({}, {}) cells {:?}",
            piece.kind,
            piece.x,
            piece.y,
            piece.board_cells()
        );
        Some(piece.kind)
    }

    /// Replace the falling piece with a fresh random one.
    ///
    /// A fresh piece that lands on placed cells ends the game.
    fn spawn_piece(&mut self) -> bool {
        self.falling = self.factory.create_random_piece();
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        debug!("spawned {:?} at ({}, {})", self.falling.kind, self.falling.x, self.falling.y);

        if self.overlaps_stack() {
            info!("spawn blocked for {:?}, game over", self.falling.kind);
            self.game_over = true;
            return false;
        }
        true
    }

    /// One gravity step: returns true when the piece has landed, either on
    /// the floor or because one row down would put it on the stack.
    fn apply_gravity(&mut self) -> bool {
        if self.falling.y + self.falling.max_local_row() >= BOARD_HEIGHT - 1 {
            return true;
        }

        self.falling.y += 1;
        if self.overlaps_stack() {
            self.falling.y -= 1;
            return true;
        }
        false
    }

    /// Advance the game by one frame.
    ///
    /// `delta_ms` is accepted for clock symmetry and not used. Returns `None`
    /// while the gravity gate is closed, paused, or after game over. A landed
    /// piece that cannot be committed stays where it is and ends the game.
    pub fn update(&mut self, _delta_ms: u64, tick_ms: u64) -> Option<TickEvent> {
        if self.paused || self.game_over {
            return None;
        }
        if tick_ms.saturating_sub(self.last_fall_ms) <= self.fall_delay_ms {
            return None;
        }
        self.last_fall_ms = tick_ms;

        let mut event = TickEvent::default();
        if self.apply_gravity() {
            event.committed = self.commit_falling();
            if event.committed.is_none() {
                info!("landed piece overlaps the stack, game over");
                self.game_over = true;
            }
        }

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.lines += cleared.len() as u32;
            event.rows_cleared = cleared.len() as u32;
            debug!("cleared rows {:?}", cleared.as_slice());
        }

        if event.committed.is_some() {
            self.spawn_piece();
        }

        self.correct_edges();

        if self.board.row_has_any(0) {
            if !self.game_over {
                info!("stack reached the top row, game over");
            }
            self.game_over = true;
        }
        event.game_over = self.game_over;

        Some(event)
    }

    /// Shift the falling piece sideways; reverted if it would overlap the stack
    fn shift(&mut self, dx: i8) -> bool {
        let before = self.falling;
        self.falling.x += dx;
        self.correct_edges();

        if self.overlaps_stack() {
            self.falling = before;
            return false;
        }
        self.falling != before
    }

    /// Rotate the falling piece; reverted if it would overlap the stack
    fn rotate(&mut self) -> bool {
        let before = self.falling;
        self.falling.rotate();
        self.correct_edges();

        if self.overlaps_stack() {
            self.falling = before;
            return false;
        }
        self.falling != before
    }

    /// Start over with an empty board, keeping the RNG stream
    pub fn restart(&mut self) {
        self.board.clear();
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.last_fall_ms = 0;
        self.falling = self.factory.create_random_piece();
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        info!("restarted with {:?}", self.falling.kind);
    }

    /// Apply an input action; returns true if the game state changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                return true;
            }
            GameAction::Pause if !self.game_over => {
                self.paused = !self.paused;
                return true;
            }
            _ => {}
        }

        if self.game_over || self.paused {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.shift(-1),
            GameAction::MoveRight => self.shift(1),
            GameAction::SoftDrop => {
                self.last_fall_ms = 0;
                true
            }
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop | GameAction::Pause | GameAction::Restart => false,
        }
    }
}

impl Default for GameState<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
