//! Shared types and constants for the blockfall workspace.
//!
//! Everything in here is plain data with no dependencies, so the same
//! definitions can be used by the rules engine, the terminal view and the
//! input mapper.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_DELAY_MS` | 1000 | Gravity interval; a tick must be strictly later than this |
//! | `FRAME_MS` | 16 | Cadence of the interactive loop (~60 FPS) |
//!
//! # Pixel Grid
//!
//! Each board cell maps to a 32px square; the filled rect is inset by 3px on
//! the top/left and is 26px wide and tall.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.color().a, 0xFF);
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i8 = 20;

/// Board offset given to a freshly spawned piece
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Gravity interval in milliseconds
pub const FALL_DELAY_MS: u64 = 1000;

/// Interactive loop cadence in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Side of one board cell in pixels
pub const CELL_PX: i32 = 32;

/// Inset of the filled rect inside its cell
pub const CELL_BORDER_PX: i32 = 3;

/// Side of the filled rect
pub const CELL_FILL_PX: i32 = 26;

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque color from its red/green/blue channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

/// The seven piece families
///
/// Each family has a fixed color:
/// - **I**: Cyan
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in selector order. The random factory indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Display color shared by every cell of this kind
    pub fn color(&self) -> Rgba {
        match self {
            PieceKind::I => Rgba::opaque(0x00, 0xFF, 0xFF),
            PieceKind::J => Rgba::opaque(0x00, 0x00, 0xFF),
            PieceKind::L => Rgba::opaque(0xFF, 0x7F, 0x00),
            PieceKind::O => Rgba::opaque(0xFF, 0xFF, 0x00),
            PieceKind::S => Rgba::opaque(0x00, 0xFF, 0x00),
            PieceKind::T => Rgba::opaque(0x80, 0x00, 0x80),
            PieceKind::Z => Rgba::opaque(0xFF, 0x00, 0x00),
        }
    }
}

/// Discrete input events understood by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the falling piece one column left
    MoveLeft,
    /// Shift the falling piece one column right
    MoveRight,
    /// Skip the remaining gravity delay so the next update drops the piece
    SoftDrop,
    /// Rotate the falling piece 90°
    Rotate,
    /// Accepted but ignored
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start over with an empty board
    Restart,
}

/// Outcome of one gravity tick.
///
/// Produced only when the gravity gate opened; a gated update yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvent {
    /// Kind of the piece committed to the board during this tick, if any
    pub committed: Option<PieceKind>,
    /// Number of full rows removed
    pub rows_cleared: u32,
    /// The game ended on this tick
    pub game_over: bool,
}
