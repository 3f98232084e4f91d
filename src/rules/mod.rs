//! Rules of the guessing game.
//!
//! `GuessEngine` decides:
//! - What a secret looks like
//! - Which guesses are valid
//! - How one guess turns a state into the next
//!
//! `Feedback` is the typed outcome of a single evaluation.

pub mod engine;
pub mod feedback;

pub use engine::GuessEngine;
pub use feedback::Feedback;
