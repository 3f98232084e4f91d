//! Game bounds and session configuration.
//!
//! The bounds are fixed: secrets and guesses live in `[MIN_GUESS, MAX]`
//! and every game allows `ATTEMPTS_MAX` evaluated guesses. Callers read
//! them but never change them.
//!
//! `SessionConfig` only controls how a `GuessSession` drives the engine
//! (seeding and strictness), not the rules themselves.

use serde::{Deserialize, Serialize};

use crate::error::GuessError;

/// Lowest valid secret or guess.
pub const MIN_GUESS: i64 = 1;

/// Highest valid secret or guess (inclusive).
pub const MAX: i64 = 100;

/// Guesses allowed per game.
pub const ATTEMPTS_MAX: u32 = 10;

/// The inclusive range a secret is drawn from, plus the attempt budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessBounds {
    min: i64,
    max: i64,
    attempts: u32,
}

impl GuessBounds {
    /// The only bounds the engine plays with.
    pub const STANDARD: GuessBounds = GuessBounds {
        min: MIN_GUESS,
        max: MAX,
        attempts: ATTEMPTS_MAX,
    };

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Attempts per game.
    #[must_use]
    pub const fn attempts(self) -> u32 {
        self.attempts
    }

    /// Check whether a candidate lies inside the bounds.
    #[must_use]
    pub const fn contains(self, candidate: i64) -> bool {
        candidate >= self.min && candidate <= self.max
    }
}

impl Default for GuessBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl std::fmt::Display for GuessBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] x{}", self.min, self.max, self.attempts)
    }
}

/// Configuration for a `GuessSession`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed. `None` draws a seed from entropy, so every session differs.
    pub seed: Option<u64>,

    /// Reject out-of-range guesses and guesses after game over.
    /// When false the session forwards everything to the permissive engine.
    pub strict: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            strict: true,
        }
    }
}

impl SessionConfig {
    /// Use a fixed seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Toggle strict guess checking.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GuessError> {
        Ok(serde_json::from_str(json)?)
    }
}
