//! Python bindings for the guessing engine.
//!
//! # Quick Start
//!
//! ```python
//! import guess_engine as ge
//!
//! game = ge.GuessGame(seed=42)
//! print(game.guess(50))        # "Too high! Try again." or similar
//! print(game.remaining_attempts, game.guess_history)
//!
//! if game.is_over:
//!     game.restart()
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// guess_engine: rules engine for a number-guessing game.
#[pymodule]
fn guess_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGuessGame>()?;
    Ok(())
}
