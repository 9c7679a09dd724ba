//! Runtime settings for a game session.

use crate::types::FALL_DELAY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// A gravity tick fires only once more than this many ms have passed
    pub fall_delay_ms: u64,
    /// Seed for the piece factory; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fall_delay_ms(mut self, fall_delay_ms: u64) -> Self {
        self.fall_delay_ms = fall_delay_ms;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fall_delay_ms: FALL_DELAY_MS,
            seed: None,
        }
    }
}
