//! # guess-engine
//!
//! Rules engine for a one-player number-guessing game.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Every guess produces a brand-new `GameState`.
//!    Earlier states stay valid, so callers get history and undo for free.
//!
//! 2. **Injected Randomness**: Secrets come from a `SecretSource`. Use
//!    `GameRng` for seeded, reproducible games, `ThreadSource` for casual
//!    play, and `FixedSequence` for scripted tests.
//!
//! 3. **No Lifecycle**: `GuessEngine` is a zero-sized value. Create one
//!    wherever it is needed; there is nothing to share or tear down.
//!
//! ## Quick Start
//!
//! ```
//! use guess_engine::{GameRng, GuessEngine};
//!
//! let engine = GuessEngine::new();
//! let state = engine.initialize(&mut GameRng::new(7));
//!
//! let guess = 50;
//! assert!(engine.is_valid_guess(guess));
//! let next = engine.evaluate_guess(&state, guess);
//!
//! assert_eq!(next.remaining_attempts(), GuessEngine::ATTEMPTS_MAX - 1);
//! assert_eq!(next.last_guess(), Some(50));
//! assert!(state.guess_history().is_empty()); // untouched
//! ```
//!
//! ## Modules
//!
//! - `core`: Bounds, session configuration, RNG, game state
//! - `rules`: `GuessEngine` and per-guess `Feedback`
//! - `session`: `GuessSession`, a caller-side loop over the engine
//! - `error`: `GuessError` for the checked entry points
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GuessBounds, SessionConfig, ATTEMPTS_MAX, MAX, MIN_GUESS,
    FixedSequence, GameRng, SecretSource, ThreadSource,
    GameState, GameStatus,
};

pub use crate::error::GuessError;

pub use crate::rules::{Feedback, GuessEngine};

pub use crate::session::GuessSession;
