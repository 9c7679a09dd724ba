//! Terminal front end.
//!
//! Renders game snapshots into a character framebuffer and flushes that
//! framebuffer to the terminal. Board cells are drawn through the core's
//! render contract, so this crate never reads controller state directly.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
