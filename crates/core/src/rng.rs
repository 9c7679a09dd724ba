//! RNG module - random piece factory
//!
//! Every spawn is one independent uniform draw over the seven kinds. There is
//! no bag, so streaks and droughts are possible.
//!
//! The randomness source is owned by the factory and supplied by the caller;
//! seeding a `StdRng` makes a whole game reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Piece;
use crate::types::PieceKind;

/// Produces fresh pieces at the spawn position
#[derive(Debug, Clone)]
pub struct PieceFactory<R = StdRng> {
    rng: R,
}

impl PieceFactory<StdRng> {
    /// Factory backed by a seeded `StdRng`
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Factory seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PieceFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        let selector = self.rng.gen_range(0..PieceKind::ALL.len());
        PieceKind::ALL[selector]
    }

    /// Create a new piece of a random kind at (3, 0)
    pub fn create_random_piece(&mut self) -> Piece {
        Piece::new(self.next_kind())
    }
}
