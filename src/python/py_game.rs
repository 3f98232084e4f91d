//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::SessionConfig;
use crate::error::GuessError;
use crate::rules::GuessEngine;
use crate::session::GuessSession;

fn to_py_err(err: GuessError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a guessing session.
///
/// Holds the current game and replaces it on every guess.
#[pyclass(name = "GuessGame")]
pub struct PyGuessGame {
    session: GuessSession,
}

#[pymethods]
impl PyGuessGame {
    /// Upper bound of the secret range (inclusive).
    #[classattr]
    const MAX: i64 = GuessEngine::MAX;

    /// Guesses allowed per game.
    #[classattr]
    const ATTEMPTS_MAX: u32 = GuessEngine::ATTEMPTS_MAX;

    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible secrets (None for random)
    /// - strict: reject out-of-range guesses and guesses after game over
    #[new]
    #[pyo3(signature = (seed = None, strict = true))]
    fn new(seed: Option<u64>, strict: bool) -> Self {
        let config = SessionConfig {
            seed,
            strict,
        };
        Self {
            session: GuessSession::new(config),
        }
    }

    /// Check a candidate against the fixed range.
    #[staticmethod]
    fn is_valid_guess(value: i64) -> bool {
        GuessEngine::new().is_valid_guess(value)
    }

    /// Evaluate a guess. Returns the feedback message.
    fn guess(&mut self, value: i64) -> PyResult<String> {
        let state = self.session.submit(value).map_err(to_py_err)?;
        Ok(state.message().to_string())
    }

    /// Parse and evaluate raw text input. Returns the feedback message.
    fn guess_input(&mut self, text: &str) -> PyResult<String> {
        let state = self.session.submit_input(text).map_err(to_py_err)?;
        Ok(state.message().to_string())
    }

    /// Start a new game.
    fn restart(&mut self) {
        self.session.restart();
    }

    #[getter]
    fn secret_number(&self) -> i64 {
        self.session.state().secret_number()
    }

    #[getter]
    fn remaining_attempts(&self) -> u32 {
        self.session.state().remaining_attempts()
    }

    #[getter]
    fn last_guess(&self) -> Option<i64> {
        self.session.state().last_guess()
    }

    #[getter]
    fn message(&self) -> String {
        self.session.state().message().to_string()
    }

    #[getter]
    fn is_over(&self) -> bool {
        self.session.state().is_over()
    }

    #[getter]
    fn won(&self) -> Option<bool> {
        self.session.state().won()
    }

    #[getter]
    fn guess_history(&self) -> Vec<i64> {
        self.session.state().guess_history().iter().copied().collect()
    }

    /// Seed of the session RNG.
    #[getter]
    fn seed(&self) -> u64 {
        self.session.seed()
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        let status = match state.won() {
            Some(true) => "won",
            Some(false) => "lost",
            None => "ongoing",
        };
        format!(
            "GuessGame(remaining={}, guesses={}, status={})",
            state.remaining_attempts(),
            state.guess_history().len(),
            status
        )
    }
}
