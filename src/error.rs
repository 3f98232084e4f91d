//! Errors raised by the checked entry points.
//!
//! The core transition (`GuessEngine::evaluate_guess`) is total and never
//! returns these. They come from `try_evaluate_guess`, `GuessSession`,
//! config loading, and state snapshots.

/// Errors from checked guessing operations.
#[derive(Debug, thiserror::Error)]
pub enum GuessError {
    #[error("not a number: {input:?}")]
    NotANumber { input: String },

    #[error("guess {candidate} is out of range [{min}, {max}]")]
    OutOfRange { candidate: i64, min: i64, max: i64 },

    #[error("game is already over; start a new game")]
    GameOver,

    #[error("snapshot describes an impossible game: {reason}")]
    InvalidSnapshot { reason: &'static str },

    #[error("failed to encode or decode state snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("invalid session config: {0}")]
    Config(#[from] serde_json::Error),
}
