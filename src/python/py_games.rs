//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{Difficulty, GameConfig, GameRng, GameSession};
use crate::rules::{GameEngine, GuessResult};

use super::py_core::{value_error, PyRgb};

/// Python wrapper for a game engine plus its session.
#[pyclass(name = "ColorGame")]
pub struct PyColorGame {
    engine: GameEngine,
    session: GameSession,
}

fn parse_difficulty(label: &str) -> PyResult<Difficulty> {
    label.parse::<Difficulty>().map_err(value_error)
}

#[pymethods]
impl PyColorGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - difficulty: "Easy", "Hard" or "Pro"
    /// - max_health: Lives per game
    /// - seed: RNG seed; omit for an entropy-seeded game
    #[new]
    #[pyo3(signature = (difficulty = "Easy", max_health = 5, seed = None))]
    fn new(difficulty: &str, max_health: u32, seed: Option<u64>) -> PyResult<Self> {
        let config = GameConfig::new()
            .with_max_health(max_health)
            .with_starting_difficulty(parse_difficulty(difficulty)?);
        let engine = GameEngine::new(config).map_err(value_error)?;
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let session = engine.new_session(rng);
        Ok(Self { engine, session })
    }

    /// Guess a tile.
    ///
    /// Returns "correct", "incorrect" or "game_over". Raises `ValueError`
    /// for indices off the board (including negative ones) and while the
    /// game is over.
    fn guess(&mut self, index: i64) -> PyResult<&'static str> {
        let result = self
            .engine
            .evaluate_tile(&mut self.session, index)
            .map_err(value_error)?;
        Ok(match result {
            GuessResult::Correct { .. } => "correct",
            GuessResult::Incorrect { .. } => "incorrect",
            GuessResult::GameOver { .. } => "game_over",
        })
    }

    /// New colors, same score and health.
    fn reshuffle(&mut self) -> PyResult<()> {
        self.engine
            .reshuffle(&mut self.session)
            .map(|_| ())
            .map_err(value_error)
    }

    /// Change mode, resetting score and health.
    fn set_difficulty(&mut self, difficulty: &str) -> PyResult<()> {
        let difficulty = parse_difficulty(difficulty)?;
        self.engine.set_difficulty(&mut self.session, difficulty);
        Ok(())
    }

    /// Close the game-over screen. Returns False if no game was over.
    fn dismiss_game_over(&mut self) -> bool {
        self.engine.dismiss_game_over(&mut self.session)
    }

    #[getter]
    fn difficulty(&self) -> &'static str {
        self.session.difficulty().label()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.session.score()
    }

    #[getter]
    fn health(&self) -> u32 {
        self.session.health()
    }

    #[getter]
    fn colors(&self) -> Vec<PyRgb> {
        self.session.round().colors().iter().copied().map(PyRgb).collect()
    }

    #[getter]
    fn target_code(&self) -> String {
        self.session.round().target_code()
    }

    #[getter]
    fn target_index(&self) -> usize {
        self.session.round().target_index()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.session.is_game_over()
    }

    fn __repr__(&self) -> String {
        format!(
            "ColorGame(difficulty={}, score={}, health={}, target={})",
            self.session.difficulty(),
            self.session.score(),
            self.session.health(),
            self.session.round().target_code()
        )
    }
}
