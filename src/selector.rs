//! Random card selection
//!
//! Draws use an explicit random source so that a fixed seed replays the same
//! cards. Without a seed the thread-local OS-seeded generator is used.

use crate::core::{CardEntry, Deck};
use crate::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

/// Draws cards from decks with an owned random source
pub struct CardSelector {
    rng: Box<dyn rand::RngCore>,
}

impl CardSelector {
    /// Create a selector seeded from OS entropy
    pub fn new() -> Self {
        CardSelector {
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Create a selector with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        CardSelector {
            rng: Box::new(ChaCha12Rng::seed_from_u64(seed)),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Pick one card from `deck`, uniformly over its entries
    pub fn draw<'d>(&mut self, deck: &'d Deck) -> Result<&'d CardEntry> {
        deck.draw(&mut self.rng)
    }
}

impl Default for CardSelector {
    fn default() -> Self {
        Self::new()
    }
}
