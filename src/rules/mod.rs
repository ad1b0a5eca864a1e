//! Game rules.
//!
//! `GameEngine` owns the only decisions the game makes:
//! - Building rounds
//! - Judging guesses
//! - Adjusting score and health
//! - Moving between playing and game over
//!
//! Renderers and input handling call into it but never touch session
//! fields directly.

pub mod engine;

pub use engine::{tile_index, GameEngine, GuessResult};
