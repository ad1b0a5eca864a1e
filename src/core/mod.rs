//! Core game types: colors, difficulty, state, RNG, configuration, errors.
//!
//! This module holds the plain data the engine operates on. Rules live in
//! `rules`; everything here is free of game-flow decisions.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use color::Rgb;
pub use config::{Difficulty, GameConfig, DEFAULT_MAX_HEALTH, MAX_TILES};
pub use error::GameError;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use state::{GamePhase, GameSession, HealthState, RoundState, ScoreState, SessionView};
