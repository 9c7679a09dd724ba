//! Core game logic - pure, deterministic, and testable
//!
//! This crate owns the playfield rules: the board of placed cells, the
//! falling piece, gravity timing, collision handling, rotation and row
//! clearing. It performs no I/O; renderers read a [`GameSnapshot`] copy and
//! input arrives as [`types::GameAction`] values.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of placed cells, full-row detection and compaction
//! - [`pieces`]: the seven base shapes, their rotation rule, and [`Piece`]
//! - [`rng`]: uniform random piece factory over an injected RNG
//! - [`game_state`]: the controller and its per-tick update algorithm
//! - [`snapshot`]: read-only view and the pixel rect render contract
//! - [`config`]: runtime settings
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // Gravity only fires once more than a second has passed.
//! assert!(game.update(16, 1000).is_none());
//! assert!(game.update(16, 1001).is_some());
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, PlacedCell};
pub use config::GameConfig;
pub use game_state::GameState;
pub use pieces::{base_shape, rotate_shape, Piece, PieceShape};
pub use rng::PieceFactory;
pub use snapshot::{CellRect, FallingSnapshot, GameSnapshot, RenderSink};
