//! Outcome of evaluating one guess.

use serde::{Deserialize, Serialize};

/// What a guess told the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// Guess matched the secret.
    Correct,
    /// Guess was above the secret, attempts remain.
    TooHigh,
    /// Guess was below the secret, attempts remain.
    TooLow,
    /// Last attempt spent without a match.
    OutOfAttempts { secret: i64 },
}

impl Feedback {
    /// Does this outcome end the game?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Feedback::Correct | Feedback::OutOfAttempts { .. })
    }

    /// `Some(won)` for terminal outcomes, `None` otherwise.
    #[must_use]
    pub fn won(self) -> Option<bool> {
        match self {
            Feedback::Correct => Some(true),
            Feedback::OutOfAttempts { .. } => Some(false),
            Feedback::TooHigh | Feedback::TooLow => None,
        }
    }

    /// Player-facing text stored in `GameState::message`.
    #[must_use]
    pub fn message(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Correct => f.write_str("Congratulations! You guessed the number!"),
            Feedback::TooHigh => f.write_str("Too high! Try again."),
            Feedback::TooLow => f.write_str("Too low! Try again."),
            Feedback::OutOfAttempts { secret } => write!(f, "Game over! The number was {secret}."),
        }
    }
}
