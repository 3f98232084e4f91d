//! Caller-side driver for a sequence of games.
//!
//! A `GuessSession` holds the current `GameState` and a seeded RNG and
//! walks the usual loop: read input, check it, evaluate, show, restart.
//! Rendering is up to the caller.
//!
//! ```
//! use guess_engine::{GuessSession, SessionConfig};
//!
//! let mut session = GuessSession::new(SessionConfig::default().with_seed(42));
//! let state = session.submit_input(" 50 ").unwrap();
//! assert_eq!(state.remaining_attempts(), 9);
//! assert!(session.submit_input("fifty").is_err());
//! ```

use std::num::IntErrorKind;

use tracing::{debug, warn};

use crate::core::config::{GuessBounds, SessionConfig};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::error::GuessError;
use crate::rules::GuessEngine;

/// A running sequence of guessing games.
#[derive(Clone, Debug)]
pub struct GuessSession {
    engine: GuessEngine,
    config: SessionConfig,
    rng: GameRng,
    game_seed: u64,
    state: GameState,
    games_played: u32,
}

impl GuessSession {
    /// Start a session and its first game.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let engine = GuessEngine::new();
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), strict = config.strict, "session started");
        let mut game_rng = rng.fork();
        let state = engine.initialize(&mut game_rng);
        Self {
            engine,
            config,
            game_seed: game_rng.seed(),
            rng,
            state,
            games_played: 1,
        }
    }

    /// The current game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> GuessEngine {
        self.engine
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Games started in this session, including the current one.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Seed of the session RNG. Replaying it reproduces every secret.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Seed of the stream the current game's secret was drawn from.
    ///
    /// Each game forks its own stream off the session RNG, so
    /// `GameRng::new(game_seed)` replays this game alone.
    #[must_use]
    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Parse raw player input into a candidate.
    ///
    /// Surrounding whitespace and control characters are ignored. Numbers
    /// too large for `i64` are `OutOfRange` (saturated to `i64::MAX`/`MIN`);
    /// otherwise the range is checked on submit.
    pub fn parse_guess(input: &str) -> Result<i64, GuessError> {
        let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c.is_control());
        trimmed.parse::<i64>().map_err(|err| {
            let bounds = GuessBounds::STANDARD;
            let out_of_range = |candidate| GuessError::OutOfRange {
                candidate,
                min: bounds.min(),
                max: bounds.max(),
            };
            match err.kind() {
                IntErrorKind::PosOverflow => out_of_range(i64::MAX),
                IntErrorKind::NegOverflow => out_of_range(i64::MIN),
                _ => {
                    warn!(input, "rejected non-numeric guess");
                    GuessError::NotANumber {
                        input: input.to_string(),
                    }
                }
            }
        })
    }

    /// Evaluate a guess against the current game.
    ///
    /// In strict mode, an out-of-range candidate or a finished game is an
    /// error and the state is left as it was. Otherwise the engine evaluates
    /// whatever it is given.
    pub fn submit(&mut self, candidate: i64) -> Result<&GameState, GuessError> {
        let next = if self.config.strict {
            self.engine.try_evaluate_guess(&self.state, candidate)?
        } else {
            self.engine.evaluate_guess(&self.state, candidate)
        };
        self.state = next;
        Ok(&self.state)
    }

    /// Parse and submit raw input.
    pub fn submit_input(&mut self, input: &str) -> Result<&GameState, GuessError> {
        let candidate = Self::parse_guess(input)?;
        self.submit(candidate)
    }

    /// Throw away the current game and start a new one.
    pub fn restart(&mut self) -> &GameState {
        let mut game_rng = self.rng.fork();
        self.game_seed = game_rng.seed();
        self.state = self.engine.initialize(&mut game_rng);
        self.games_played += 1;
        debug!(games_played = self.games_played, "game restarted");
        &self.state
    }
}

impl Default for GuessSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
