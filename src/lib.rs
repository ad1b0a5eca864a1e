//! # color-match
//!
//! Engine for an RGB guessing game: a target color is shown as a code such
//! as `rgb(12, 200, 88)` and the player picks the matching tile.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: A `GameSession` is an ordinary value. The
//!    engine mutates it through `&mut`; there are no globals.
//!
//! 2. **Injected Randomness**: Rounds draw from a `RandomSource`. Sessions
//!    carry a seeded `GameRng`, so every game can be replayed.
//!
//! 3. **Synchronous Transitions**: Every operation finishes its state change
//!    before returning. Animation and timing belong to the renderer.
//!
//! ## Modules
//!
//! - `core`: Colors, difficulty, configuration, session state, RNG, errors
//! - `rules`: `GameEngine`, the only place game decisions are made
//! - `input`: Input events, the `Renderer` trait and the `Dispatcher`

pub mod core;
pub mod input;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameConfig, GameError, GamePhase, GameRng, GameRngState, GameSession, RandomSource,
    Rgb, RoundState, SessionView,
};

pub use crate::input::{Dispatcher, Feedback, InputEvent, Renderer};

pub use crate::rules::{GameEngine, GuessResult};
