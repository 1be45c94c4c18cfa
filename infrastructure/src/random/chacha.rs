//! ChaCha-based [`RandomSource`]
//!
//! Seeded from the OS by default. A fixed seed (`--seed` / `game.seed`)
//! makes every round of a session reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use undercover_domain::RandomSource;

/// Production random source.
#[derive(Debug, Clone)]
pub struct ChaChaRandom {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl ChaChaRandom {
    /// Create a random source.
    ///
    /// # Arguments
    ///
    /// * `seed` - Optional seed for deterministic behavior
    ///   - `Some(seed)` - same seed, same rounds (useful for testing)
    ///   - `None` - seeded from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng, seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for ChaChaRandom {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RandomSource for ChaChaRandom {
    fn index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
