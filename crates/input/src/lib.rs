//! Terminal input mapping.
//!
//! Turns `crossterm` key events into discrete [`crate::types::GameAction`]s.
//! Each press (and each terminal auto-repeat) is one action; there is no
//! DAS/ARR layer, gravity pacing lives in the core controller.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
