//! Error type shared by every fallible engine operation.

use thiserror::Error;

/// Errors raised by the engine.
///
/// None of these leave the session in a modified state: operations check
/// their input before touching anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("tile index {index} is out of range for {tile_count} tiles")]
    InvalidIndex { index: i64, tile_count: usize },
    #[error("the game is over and must be dismissed first")]
    GameOver,
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
    #[error("invalid color code: {0:?}")]
    InvalidColorCode(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
