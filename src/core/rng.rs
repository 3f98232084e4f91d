//! Randomness for secret generation.
//!
//! ## Key Features
//!
//! - **Pluggable**: the engine draws secrets through `SecretSource`, so
//!   callers pick the randomness they want
//! - **Deterministic**: `GameRng` with the same seed produces the same games
//! - **Forkable**: independent per-game streams from one session seed
//!
//! ## Sources
//!
//! ```
//! use guess_engine::core::{FixedSequence, GameRng, SecretSource};
//!
//! let mut rng = GameRng::new(42);
//! let secret = rng.draw(1, 100);
//! assert!((1..=100).contains(&secret));
//!
//! // Same seed, same secret
//! assert_eq!(GameRng::new(42).draw(1, 100), secret);
//!
//! // Scripted secrets for tests
//! let mut fixed = FixedSequence::new([42, 7]);
//! assert_eq!(fixed.draw(1, 100), 42);
//! assert_eq!(fixed.draw(1, 100), 7);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of secret numbers.
///
/// Implementations must return a value in `[min, max]` (both inclusive).
/// Callers guarantee `min <= max`.
pub trait SecretSource {
    /// Draw one value uniformly from `[min, max]`.
    fn draw(&mut self, min: i64, max: i64) -> i64;
}

impl<S: SecretSource + ?Sized> SecretSource for &mut S {
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        (**self).draw(min, max)
    }
}

/// Deterministic RNG for reproducible games.
///
/// Uses ChaCha8 for speed. Not meant for anything security related.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from thread entropy.
    ///
    /// The seed is still recorded, so the session can be replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random integer in `[low, high]`.
    pub fn gen_range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.inner.gen_range(low..=high)
    }
}

impl SecretSource for GameRng {
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range_inclusive(min, max)
    }
}

/// Non-deterministic source backed by `rand::thread_rng`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSource;

impl SecretSource for ThreadSource {
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Values are clamped into the requested range. An empty list always
/// yields `min`.
#[derive(Clone, Debug, Default)]
pub struct FixedSequence {
    values: Vec<i64>,
    next: usize,
}

impl FixedSequence {
    /// Create a sequence from the given values.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl SecretSource for FixedSequence {
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(min, max)
    }
}
