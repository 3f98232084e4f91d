//! Core engine types: bounds, configuration, RNG, and game state.
//!
//! Nothing in here knows the rules of a guess evaluation. That lives in
//! `rules`.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{GuessBounds, SessionConfig, ATTEMPTS_MAX, MAX, MIN_GUESS};
pub use rng::{FixedSequence, GameRng, SecretSource, ThreadSource};
pub use state::{GameState, GameStatus};
