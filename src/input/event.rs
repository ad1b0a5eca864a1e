//! Input events and player-facing feedback.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, Rgb};

/// Caption of the reshuffle button.
pub const LABEL_RESHUFFLE: &str = "New Colors";

/// A discrete input from the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A tile was clicked (0-based board position).
    TileClicked(usize),
    /// A mode button was pressed.
    ModeSelected(Difficulty),
    /// The "New Colors" button was pressed.
    ReshuffleRequested,
    /// The game-over screen was clicked away.
    GameOverDismissed,
}

/// What the player should be told after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// Right tile. Renderers paint every tile and the heading with `color`.
    Correct { color: Rgb },
    /// Wrong tile. Renderers fade out `tile`.
    TryAgain { tile: usize },
    /// Clear any message.
    Cleared,
}

impl Feedback {
    /// Message text for the result line.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::Correct { .. } => "Correct!",
            Feedback::TryAgain { .. } => "⚠ Try again...",
            Feedback::Cleared => "",
        }
    }
}
