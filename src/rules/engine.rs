//! The game engine: round generation, guess evaluation, scoring and health.
//!
//! `GameEngine` is stateless apart from its configuration. Every operation
//! takes the caller's `GameSession` and leaves it consistent on return:
//!
//! | Operation          | Score    | Health      | New round |
//! |--------------------|----------|-------------|-----------|
//! | correct guess      | +1       | -           | yes       |
//! | incorrect guess    | -        | -1          | no        |
//! | `reshuffle`        | -        | -           | yes       |
//! | `set_difficulty`   | reset    | reset       | yes       |
//! | `dismiss_game_over`| reset    | reset       | yes       |

use log::{debug, info};

use crate::core::color::Rgb;
use crate::core::config::{Difficulty, GameConfig};
use crate::core::error::GameError;
use crate::core::rng::GameRng;
use crate::core::state::{GamePhase, GameSession, RoundState};

/// Outcome of a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// The target tile was picked. A new round has already started;
    /// `color` is the color that was just found.
    Correct { color: Rgb },
    /// Wrong tile, lives remain.
    Incorrect { health_remaining: u32 },
    /// Wrong tile and the last life is gone.
    GameOver { final_score: u32 },
}

impl GuessResult {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessResult::Correct { .. })
    }
}

/// Convert a signed tile position from a front end into a board index.
///
/// Negative positions and positions past the last tile are rejected.
pub fn tile_index(index: i64, tile_count: usize) -> Result<usize, GameError> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < tile_count)
        .ok_or(GameError::InvalidIndex { index, tile_count })
}

/// Applies game rules to a `GameSession`.
///
/// `GameEngine::default()` uses `GameConfig::default()`: five lives,
/// starting on Easy.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    /// Create an engine, rejecting unusable configurations.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a session under the configured difficulty with full health.
    #[must_use]
    pub fn new_session(&self, rng: GameRng) -> GameSession {
        let session = GameSession::new(self.config.starting_difficulty, self.config.max_health, rng);
        debug!(
            "new session: difficulty={}, seed={}, target={}",
            session.difficulty(),
            session.rng.seed(),
            session.round().target_code()
        );
        session
    }

    /// Replace the current round with a fresh one for `difficulty`.
    ///
    /// `difficulty` becomes the active difficulty. Score, health and
    /// phase are left alone.
    pub fn start_round<'s>(&self, session: &'s mut GameSession, difficulty: Difficulty) -> &'s RoundState {
        session.difficulty = difficulty;
        session.round = RoundState::generate(difficulty, &mut session.rng);
        debug!(
            "round started: {} tiles, target #{} {}",
            session.round.tile_count(),
            session.round.target_index(),
            session.round.target_code()
        );
        &session.round
    }

    /// Evaluate a click on tile `index`.
    ///
    /// Matching is by position: a tile that happens to share the target's
    /// color but sits elsewhere is wrong.
    pub fn evaluate_guess(&self, session: &mut GameSession, index: usize) -> Result<GuessResult, GameError> {
        if session.is_game_over() {
            return Err(GameError::GameOver);
        }
        let tile_count = session.round.tile_count();
        if index >= tile_count {
            return Err(GameError::InvalidIndex {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                tile_count,
            });
        }

        if session.round.is_target(index) {
            let color = session.round.target_color();
            session.score.increment();
            debug!("correct guess #{index}, score {}", session.score.score);
            let difficulty = session.difficulty;
            self.start_round(session, difficulty);
            return Ok(GuessResult::Correct { color });
        }

        session.health.decrement();
        if session.health.is_depleted() {
            let final_score = session.score.score;
            session.phase = GamePhase::GameOver { final_score };
            info!("game over: final score {final_score} on {}", session.difficulty);
            return Ok(GuessResult::GameOver { final_score });
        }

        let health_remaining = session.health.health();
        debug!("incorrect guess #{index}, health {health_remaining}");
        Ok(GuessResult::Incorrect { health_remaining })
    }

    /// Evaluate a click at a signed position, as delivered by front ends
    /// that report positions as plain integers.
    ///
    /// Same rules as `evaluate_guess`; `-1` and other off-board positions
    /// give `GameError::InvalidIndex` and change nothing.
    pub fn evaluate_tile(&self, session: &mut GameSession, index: i64) -> Result<GuessResult, GameError> {
        if session.is_game_over() {
            return Err(GameError::GameOver);
        }
        let index = tile_index(index, session.round.tile_count())?;
        self.evaluate_guess(session, index)
    }

    /// Switch mode. Resets score and health and starts a new round.
    ///
    /// Allowed in any phase; it also closes a pending game-over screen.
    pub fn set_difficulty<'s>(&self, session: &'s mut GameSession, difficulty: Difficulty) -> &'s RoundState {
        info!("difficulty set to {difficulty} ({} tiles)", difficulty.tile_count());
        session.difficulty = difficulty;
        self.reset_session(session)
    }

    /// New colors for the current round. Score and health are unchanged.
    pub fn reshuffle<'s>(&self, session: &'s mut GameSession) -> Result<&'s RoundState, GameError> {
        if session.is_game_over() {
            return Err(GameError::GameOver);
        }
        let difficulty = session.difficulty;
        Ok(self.start_round(session, difficulty))
    }

    /// Leave the game-over screen and start a new game at the same difficulty.
    ///
    /// Returns `false` (and changes nothing) when no game is over.
    pub fn dismiss_game_over(&self, session: &mut GameSession) -> bool {
        if !session.is_game_over() {
            return false;
        }
        self.reset_session(session);
        true
    }

    /// Full reset under the active difficulty: score 0, full health,
    /// new round, playing.
    pub fn reset_session<'s>(&self, session: &'s mut GameSession) -> &'s RoundState {
        session.score.reset();
        session.health.restore();
        session.phase = GamePhase::Playing;
        let difficulty = session.difficulty;
        self.start_round(session, difficulty)
    }
}
