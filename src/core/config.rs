//! Game configuration types.
//!
//! - `Difficulty`: The three board sizes a player can pick
//! - `GameConfig`: Engine-wide settings (health pool, starting mode)
//!
//! Both are plain values. Callers build a `GameConfig` with the builder
//! methods, or deserialize one, and hand it to `GameEngine::new`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of tile slots on the board. Slots beyond the active difficulty's
/// count are shown as restricted.
pub const MAX_TILES: usize = 9;

/// Default number of lives.
pub const DEFAULT_MAX_HEALTH: u32 = 5;

/// Difficulty mode, fixing how many tiles a round offers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 3 tiles.
    #[default]
    Easy,
    /// 6 tiles.
    Hard,
    /// 9 tiles.
    Pro,
}

impl Difficulty {
    /// All modes, in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Hard, Difficulty::Pro];

    /// Number of tiles in a round.
    #[must_use]
    pub const fn tile_count(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Hard => 6,
            Difficulty::Pro => 9,
        }
    }

    /// Label shown on the mode button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
            Difficulty::Pro => "Pro",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Lives at the start of a game (must be at least 1).
    pub max_health: u32,

    /// Mode a fresh session starts in.
    pub starting_difficulty: Difficulty,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            starting_difficulty: Difficulty::Easy,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of lives.
    #[must_use]
    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Set the starting difficulty.
    #[must_use]
    pub fn with_starting_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.starting_difficulty = difficulty;
        self
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_health == 0 {
            return Err(GameError::InvalidConfig("max_health must be at least 1"));
        }
        Ok(())
    }
}
