//! The guessing game rules.
//!
//! `GuessEngine` owns three things:
//! - Secret generation
//! - Guess validation
//! - The state transition for one evaluated guess
//!
//! It holds no state of its own. Build one wherever it is needed.

use tracing::{debug, trace, warn};

use crate::core::config::{GuessBounds, ATTEMPTS_MAX, MAX};
use crate::core::rng::{SecretSource, ThreadSource};
use crate::core::state::GameState;
use crate::error::GuessError;

use super::feedback::Feedback;

/// Stateless rules engine for one-player number guessing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuessEngine;

impl GuessEngine {
    /// Upper bound of the secret range (inclusive). The lower bound is 1.
    pub const MAX: i64 = MAX;

    /// Guesses allowed per game.
    pub const ATTEMPTS_MAX: u32 = ATTEMPTS_MAX;

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The fixed bounds this engine plays with.
    #[must_use]
    pub const fn bounds(&self) -> GuessBounds {
        GuessBounds::STANDARD
    }

    /// Draw a secret uniformly from `[1, MAX]`.
    pub fn generate_secret(&self, source: &mut impl SecretSource) -> i64 {
        let bounds = self.bounds();
        source.draw(bounds.min(), bounds.max())
    }

    /// Draw a secret from thread-local randomness.
    #[must_use]
    pub fn generate_secret_random(&self) -> i64 {
        self.generate_secret(&mut ThreadSource)
    }

    /// Start a new game with a secret from `source`.
    pub fn initialize(&self, source: &mut impl SecretSource) -> GameState {
        let secret = self.generate_secret(source);
        debug!(attempts = ATTEMPTS_MAX, "new game");
        trace!(secret, "secret drawn");
        GameState::fresh(secret)
    }

    /// Start a new game with a secret from thread-local randomness.
    #[must_use]
    pub fn initialize_random(&self) -> GameState {
        self.initialize(&mut ThreadSource)
    }

    /// Check that a candidate lies in `[1, MAX]`.
    ///
    /// Range only: attempts and game-over are not considered.
    #[must_use]
    pub fn is_valid_guess(&self, candidate: i64) -> bool {
        self.bounds().contains(candidate)
    }

    /// Classify `candidate` against `state` without building a new state.
    ///
    /// Priority: a match wins, then running out of attempts loses, then a hint.
    #[must_use]
    pub fn feedback_for(&self, state: &GameState, candidate: i64) -> Feedback {
        let secret = state.secret_number;
        if candidate == secret {
            Feedback::Correct
        } else if state.remaining_attempts.saturating_sub(1) == 0 {
            Feedback::OutOfAttempts { secret }
        } else if candidate > secret {
            Feedback::TooHigh
        } else {
            Feedback::TooLow
        }
    }

    /// Evaluate one guess and return the next state.
    ///
    /// Total: out-of-range candidates and terminal states are evaluated with
    /// the same rules rather than rejected. Use `is_valid_guess` and
    /// `GameState::is_over` first, or `try_evaluate_guess`.
    #[must_use]
    pub fn evaluate_guess(&self, state: &GameState, candidate: i64) -> GameState {
        if !self.is_valid_guess(candidate) {
            warn!(candidate, "evaluating out-of-range guess");
        }
        if state.is_over {
            warn!("evaluating guess on a finished game");
        }

        let feedback = self.feedback_for(state, candidate);

        let mut guess_history = state.guess_history.clone();
        guess_history.push_back(candidate);

        // A hint leaves the outcome as it was, so a finished game stays finished.
        let (is_over, won) = match feedback.won() {
            Some(won) => (true, Some(won)),
            None => (state.is_over, state.won),
        };

        let next = GameState {
            secret_number: state.secret_number,
            remaining_attempts: state.remaining_attempts.saturating_sub(1),
            last_guess: Some(candidate),
            message: feedback.message(),
            is_over,
            won,
            guess_history,
        };

        trace!(candidate, remaining = next.remaining_attempts, ?feedback, "guess evaluated");
        if let Some(won) = next.won {
            debug!(won, attempts_used = next.guess_history.len(), "game over");
        }

        next
    }

    /// Like `evaluate_guess`, but rejects guesses the game cannot accept.
    ///
    /// Errors with `GameOver` on a terminal state and `OutOfRange` for a
    /// candidate outside `[1, MAX]`. The input state is untouched either way.
    pub fn try_evaluate_guess(&self, state: &GameState, candidate: i64) -> Result<GameState, GuessError> {
        if state.is_over {
            return Err(GuessError::GameOver);
        }
        if !self.is_valid_guess(candidate) {
            let bounds = self.bounds();
            return Err(GuessError::OutOfRange {
                candidate,
                min: bounds.min(),
                max: bounds.max(),
            });
        }
        Ok(self.evaluate_guess(state, candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{FixedSequence, GameRng};
    use crate::core::state::GameStatus;

    fn state_with(secret: i64, remaining: u32) -> GameState {
        let mut state = GameState::fresh(secret);
        state.remaining_attempts = remaining;
        state
    }

    #[test]
    fn test_constants() {
        assert_eq!(GuessEngine::MAX, 100);
        assert_eq!(GuessEngine::ATTEMPTS_MAX, 10);
    }

    #[test]
    fn test_is_valid_guess_boundaries() {
        let engine = GuessEngine::new();
        assert!(engine.is_valid_guess(1));
        assert!(engine.is_valid_guess(100));
        assert!(!engine.is_valid_guess(0));
        assert!(!engine.is_valid_guess(101));
        assert!(!engine.is_valid_guess(-5));
    }

    #[test]
    fn test_generate_secret_uses_source() {
        let engine = GuessEngine::new();
        let mut source = FixedSequence::new([42]);
        assert_eq!(engine.generate_secret(&mut source), 42);
    }

    #[test]
    fn test_initialize_fresh_state() {
        let engine = GuessEngine::new();
        let state = engine.initialize(&mut GameRng::new(9));
        assert!((1..=100).contains(&state.secret_number()));
        assert_eq!(state.remaining_attempts(), 10);
        assert!(state.guess_history().is_empty());
        assert!(!state.is_over());
        assert_eq!(state.won(), None);
        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_initialize_random_in_range() {
        let engine = GuessEngine::new();
        for _ in 0..100 {
            let state = engine.initialize_random();
            assert!((1..=100).contains(&state.secret_number()));
        }
    }

    #[test]
    fn test_win() {
        let engine = GuessEngine::new();
        let next = engine.evaluate_guess(&state_with(42, 10), 42);
        assert!(next.is_over());
        assert_eq!(next.won(), Some(true));
        assert_eq!(next.remaining_attempts(), 9);
        assert_eq!(next.guess_history(), &im::vector![42]);
        assert_eq!(next.message(), Feedback::Correct.message());
    }

    #[test]
    fn test_loss() {
        let engine = GuessEngine::new();
        let next = engine.evaluate_guess(&state_with(42, 1), 10);
        assert!(next.is_over());
        assert_eq!(next.won(), Some(false));
        assert_eq!(next.remaining_attempts(), 0);
        assert!(next.message().contains("42"));
        assert_eq!(next.status(), GameStatus::Over { won: false });
    }

    #[test]
    fn test_win_on_last_attempt_beats_loss() {
        let engine = GuessEngine::new();
        let next = engine.evaluate_guess(&state_with(42, 1), 42);
        assert_eq!(next.won(), Some(true));
        assert_eq!(next.remaining_attempts(), 0);
    }

    #[test]
    fn test_hints() {
        let engine = GuessEngine::new();
        let state = state_with(42, 10);

        let high = engine.evaluate_guess(&state, 50);
        assert!(!high.is_over());
        assert_eq!(high.won(), None);
        assert_eq!(high.message(), "Too high! Try again.");

        let low = engine.evaluate_guess(&state, 30);
        assert!(!low.is_over());
        assert_eq!(low.message(), "Too low! Try again.");
    }

    #[test]
    fn test_input_state_untouched() {
        let engine = GuessEngine::new();
        let state = state_with(42, 10);
        let before = state.clone();
        let _ = engine.evaluate_guess(&state, 50);
        assert_eq!(state, before);
    }

    #[test]
    fn test_permissive_on_terminal_state() {
        let engine = GuessEngine::new();
        let over = engine.evaluate_guess(&state_with(42, 1), 10);
        let again = engine.evaluate_guess(&over, 11);
        assert_eq!(again.remaining_attempts(), 0);
        assert_eq!(again.guess_history().len(), 2);
        assert!(again.is_over());
    }

    #[test]
    fn test_permissive_on_won_state_stays_won() {
        let engine = GuessEngine::new();
        let won = engine.evaluate_guess(&state_with(42, 10), 42);
        let after = engine.evaluate_guess(&won, 50);
        assert!(after.is_over());
        assert_eq!(after.won(), Some(true));
        assert_eq!(after.status(), GameStatus::Over { won: true });
        assert_eq!(after.remaining_attempts(), 8);
        assert_eq!(after.guess_history(), &im::vector![42, 50]);
        assert!(after.message().to_lowercase().contains("too high"));
    }

    #[test]
    fn test_permissive_out_of_range() {
        let engine = GuessEngine::new();
        let next = engine.evaluate_guess(&state_with(42, 10), 500);
        assert_eq!(next.last_guess(), Some(500));
        assert!(next.message().to_lowercase().contains("too high"));
    }

    #[test]
    fn test_try_evaluate_rejects() {
        let engine = GuessEngine::new();
        let state = state_with(42, 10);

        assert!(matches!(
            engine.try_evaluate_guess(&state, 0),
            Err(GuessError::OutOfRange { candidate: 0, min: 1, max: 100 })
        ));

        let over = engine.evaluate_guess(&state, 42);
        assert!(matches!(
            engine.try_evaluate_guess(&over, 10),
            Err(GuessError::GameOver)
        ));

        let ok = engine.try_evaluate_guess(&state, 30).unwrap();
        assert_eq!(ok, engine.evaluate_guess(&state, 30));
    }

    #[test]
    fn test_feedback_for_matches_transition() {
        let engine = GuessEngine::new();
        let state = state_with(42, 2);
        assert_eq!(engine.feedback_for(&state, 42), Feedback::Correct);
        assert_eq!(engine.feedback_for(&state, 43), Feedback::TooHigh);
        assert_eq!(engine.feedback_for(&state, 41), Feedback::TooLow);
        assert_eq!(
            engine.feedback_for(&state_with(42, 1), 41),
            Feedback::OutOfAttempts { secret: 42 }
        );
    }
}
