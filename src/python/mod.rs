//! Python bindings for the color-match engine.
//!
//! # Quick Start
//!
//! ```python
//! import color_match as cm
//!
//! game = cm.ColorGame(difficulty="Hard", seed=42)
//! print(game.target_code)          # e.g. "rgb(12, 200, 88)"
//! outcome = game.guess(2)          # "correct", "incorrect" or "game_over"
//! game.reshuffle()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// color_match: the RGB guessing game engine.
#[pymodule]
fn color_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRgb>()?;
    m.add_class::<PyColorGame>()?;

    Ok(())
}
