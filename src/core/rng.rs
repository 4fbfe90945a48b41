//! Deterministic random number generation for the computer opponent.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Entropy fallback**: Unseeded games pick a fresh seed and remember it
//!
//! ```
//! use rps_lab::core::{Choice, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose(&Choice::ALL), b.choose(&Choice::ALL));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backing the computer's choices.
///
/// Uses ChaCha8 for speed while keeping the output uniform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG, or a fresh entropy seed when `None`.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice, uniformly.
    ///
    /// Returns `None` for an empty slice.
    pub fn choose<T: Copy>(&mut self, slice: &[T]) -> Option<T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner).copied()
    }
}
