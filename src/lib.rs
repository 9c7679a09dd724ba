//! Terminal falling-block game (workspace facade crate).
//!
//! Re-exports the workspace crates under short module names so the binary,
//! tests and benches share one path: `tui_blockfall::{core,input,term,types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
