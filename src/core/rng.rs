//! Random number sources for round generation.
//!
//! ## Key Features
//!
//! - **Injectable**: The engine only sees `RandomSource`, a stream of uniform
//!   values in `[0, 1)`. Tests script exact sequences.
//! - **Deterministic**: `GameRng` produces the same sequence for the same seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use color_match::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let value = rng.next_unit();
//! assert!((0.0..1.0).contains(&value));
//!
//! // Same seed, same sequence
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.next_unit(), value);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Every random decision in a round (color channels, target position)
/// consumes exactly one value.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Map a unit value onto a color channel (0-255).
#[must_use]
pub fn unit_to_channel(unit: f64) -> u8 {
    (unit * 256.0).floor().clamp(0.0, 255.0) as u8
}

/// Map a unit value onto an index in `[0, len)`.
///
/// `len` must be non-zero.
#[must_use]
pub fn unit_to_index(unit: f64, len: usize) -> usize {
    debug_assert!(len > 0, "index range must be non-empty");
    let index = (unit * len as f64).floor().max(0.0) as usize;
    index.min(len - 1)
}

/// Deterministic RNG for game sessions.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
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

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_unit(&mut self) -> f64 {
        // `gen::<f64>()` samples the half-open interval [0, 1).
        self.inner.gen::<f64>()
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
