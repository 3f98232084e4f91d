//! Game state: one immutable value per point in a game.
//!
//! A `GameState` is never edited in place. `GuessEngine::evaluate_guess`
//! reads the previous state and builds the next one, so any state a caller
//! holds stays valid (and can be kept for history or undo).
//!
//! The guess history uses an `im` persistent vector, so building the next
//! state shares structure with the previous one instead of copying it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::{GuessBounds, ATTEMPTS_MAX};
use crate::error::GuessError;

/// Whether a game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// More guesses may be evaluated.
    Active,
    /// Terminal. No transition is defined from here.
    Over {
        /// True if the secret was matched, false if attempts ran out.
        won: bool,
    },
}

impl GameStatus {
    /// Check if this is a terminal status.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }
}

/// Snapshot of one game.
///
/// Deserializing checks the game invariants, so a decoded state is always
/// one the engine could have produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) secret_number: i64,
    pub(crate) remaining_attempts: u32,
    pub(crate) last_guess: Option<i64>,
    pub(crate) message: String,
    pub(crate) is_over: bool,
    pub(crate) won: Option<bool>,
    pub(crate) guess_history: Vector<i64>,
}

/// Wire form of `GameState` before the invariants are checked.
#[derive(Deserialize)]
struct RawGameState {
    secret_number: i64,
    remaining_attempts: u32,
    last_guess: Option<i64>,
    message: String,
    is_over: bool,
    won: Option<bool>,
    guess_history: Vector<i64>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GuessError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            secret_number: raw.secret_number,
            remaining_attempts: raw.remaining_attempts,
            last_guess: raw.last_guess,
            message: raw.message,
            is_over: raw.is_over,
            won: raw.won,
            guess_history: raw.guess_history,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl GameState {
    /// Fresh game around a known secret.
    ///
    /// Full attempts, empty history, no message. Fails with `OutOfRange` if
    /// the secret lies outside `[1, MAX]`.
    pub fn with_secret(secret_number: i64) -> Result<Self, GuessError> {
        let bounds = GuessBounds::STANDARD;
        if !bounds.contains(secret_number) {
            return Err(GuessError::OutOfRange {
                candidate: secret_number,
                min: bounds.min(),
                max: bounds.max(),
            });
        }
        Ok(Self::fresh(secret_number))
    }

    /// Fresh game without the range check. Callers guarantee the secret is
    /// in range (`SecretSource` draws always are).
    pub(crate) fn fresh(secret_number: i64) -> Self {
        Self {
            secret_number,
            remaining_attempts: ATTEMPTS_MAX,
            last_guess: None,
            message: String::new(),
            is_over: false,
            won: None,
            guess_history: Vector::new(),
        }
    }

    /// The number to find.
    #[must_use]
    pub fn secret_number(&self) -> i64 {
        self.secret_number
    }

    /// Guesses left in this game.
    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    /// Guesses evaluated so far.
    #[must_use]
    pub fn attempts_used(&self) -> u32 {
        ATTEMPTS_MAX.saturating_sub(self.remaining_attempts)
    }

    /// Most recently evaluated guess.
    #[must_use]
    pub fn last_guess(&self) -> Option<i64> {
        self.last_guess
    }

    /// Feedback on the last guess. Empty at game start.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// Outcome of a finished game. `None` while the game is active.
    #[must_use]
    pub fn won(&self) -> Option<bool> {
        self.won
    }

    /// Every evaluated guess, oldest first.
    #[must_use]
    pub fn guess_history(&self) -> &Vector<i64> {
        &self.guess_history
    }

    /// Typed view of `is_over` and `won`.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match (self.is_over, self.won) {
            (true, Some(won)) => GameStatus::Over { won },
            (false, _) => GameStatus::Active,
            // Rejected by every constructor and by deserialization.
            (true, None) => unreachable!("finished game without an outcome"),
        }
    }

    /// Encode this state as a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GuessError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    ///
    /// Payloads that decode but describe an impossible game are rejected
    /// with `InvalidSnapshot`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GuessError> {
        let raw: RawGameState = bincode::deserialize(bytes)?;
        Self::try_from(raw)
    }

    fn check_invariants(&self) -> Result<(), GuessError> {
        let invalid = |reason: &'static str| Err(GuessError::InvalidSnapshot { reason });

        if !GuessBounds::STANDARD.contains(self.secret_number) {
            return invalid("secret out of range");
        }
        if self.remaining_attempts > ATTEMPTS_MAX {
            return invalid("more attempts remaining than allowed");
        }
        if self.guess_history.len() != self.attempts_used() as usize {
            return invalid("history length does not match attempts used");
        }
        if self.last_guess != self.guess_history.last().copied() {
            return invalid("last guess does not match history");
        }
        match (self.is_over, self.won) {
            (false, None) => Ok(()),
            (false, Some(_)) => invalid("active game has an outcome"),
            (true, None) => invalid("finished game has no outcome"),
            (true, Some(true)) if self.last_guess != Some(self.secret_number) => {
                invalid("won game did not end on the secret")
            }
            (true, Some(false)) if self.remaining_attempts != 0 => {
                invalid("lost game has attempts left")
            }
            (true, Some(_)) => Ok(()),
        }
    }
}
