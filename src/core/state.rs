//! Game state: the current round plus score and health.
//!
//! ## RoundState
//!
//! One generation of candidate tiles and the index of the target tile.
//! Replaced wholesale whenever a new round starts.
//!
//! ## GameSession
//!
//! Everything a single player's game needs:
//! - Active difficulty
//! - Current round
//! - Score and health
//! - Phase (playing or game over)
//! - RNG
//!
//! The session is an ordinary value owned by the caller. The engine
//! mutates it through `&mut GameSession`; nothing is global.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Rgb;
use super::config::{Difficulty, MAX_TILES};
use super::rng::{unit_to_index, GameRng, RandomSource};

/// Candidate colors for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    difficulty: Difficulty,
    colors: SmallVec<[Rgb; MAX_TILES]>,
    target_index: usize,
}

impl RoundState {
    /// Generate a fresh round.
    ///
    /// Draws `difficulty.tile_count()` colors, then one more value for the
    /// target index. Colors are independent, so duplicates are possible.
    pub fn generate(difficulty: Difficulty, source: &mut impl RandomSource) -> Self {
        let count = difficulty.tile_count();
        let colors: SmallVec<[Rgb; MAX_TILES]> = (0..count).map(|_| Rgb::random(source)).collect();
        let target_index = unit_to_index(source.next_unit(), count);

        Self {
            difficulty,
            colors,
            target_index,
        }
    }

    /// Difficulty this round was generated for.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// All tile colors, in board order.
    #[must_use]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.colors.len()
    }

    /// Index of the tile the player must pick.
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Color the player must pick.
    #[must_use]
    pub fn target_color(&self) -> Rgb {
        self.colors[self.target_index]
    }

    /// Text code of the target color, e.g. `rgb(12, 200, 88)`.
    #[must_use]
    pub fn target_code(&self) -> String {
        self.target_color().code()
    }

    /// Color of a tile, if the index is on the board.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Whether `index` is the target position.
    #[must_use]
    pub fn is_target(&self, index: usize) -> bool {
        index == self.target_index
    }
}

/// Correct guesses in the current game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u32,
}

impl ScoreState {
    pub fn increment(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Remaining lives, between 0 and `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthState {
    health: u32,
    max: u32,
}

impl HealthState {
    /// Full health pool.
    #[must_use]
    pub fn new(max: u32) -> Self {
        Self { health: max, max }
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Lose one life. Never goes below zero.
    pub fn decrement(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// Refill to `max`.
    pub fn restore(&mut self) {
        self.health = self.max;
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.health == 0
    }
}

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Health ran out. Holds the score reached, shown until dismissed.
    GameOver { final_score: u32 },
}

/// A single player's game, owned by the caller.
#[derive(Clone, Debug)]
pub struct GameSession {
    /// Active difficulty. Always matches `round.difficulty()`.
    pub(crate) difficulty: Difficulty,

    pub(crate) round: RoundState,

    pub(crate) score: ScoreState,

    pub(crate) health: HealthState,

    pub(crate) phase: GamePhase,

    /// Random source for every round this session generates.
    pub rng: GameRng,
}

impl GameSession {
    /// Build a session and generate its first round.
    ///
    /// Prefer `GameEngine::new_session`, which takes the values from the
    /// engine's configuration.
    #[must_use]
    pub fn new(difficulty: Difficulty, max_health: u32, mut rng: GameRng) -> Self {
        let round = RoundState::generate(difficulty, &mut rng);
        Self {
            difficulty,
            round,
            score: ScoreState::default(),
            health: HealthState::new(max_health),
            phase: GamePhase::Playing,
            rng,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score.score
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health.health()
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.health.max()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Snapshot for renderers.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            difficulty: self.difficulty,
            colors: self.round.colors().to_vec(),
            target_code: self.round.target_code(),
            score: self.score(),
            health: self.health(),
            max_health: self.max_health(),
            phase: self.phase,
        }
    }
}

/// Everything a renderer needs to draw the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub difficulty: Difficulty,
    pub colors: Vec<Rgb>,
    pub target_code: String,
    pub score: u32,
    pub health: u32,
    pub max_health: u32,
    pub phase: GamePhase,
}
