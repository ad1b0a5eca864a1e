//! Game engine integration tests.
//!
//! These walk full games through `GameEngine`: scoring, health depletion,
//! game over and the reset rules for each kind of input.

use color_match::core::{Difficulty, GameConfig, GameError, GamePhase, GameRng, GameSession, RandomSource, Rgb, RoundState};
use color_match::rules::{GameEngine, GuessResult};

fn wrong_index(session: &GameSession) -> usize {
    (session.round().target_index() + 1) % session.round().tile_count()
}

/// Cycles through a fixed list of unit values.
struct Cycle {
    values: Vec<f64>,
    pos: usize,
}

impl Cycle {
    fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for Cycle {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

// =============================================================================
// Round Generation
// =============================================================================

#[test]
fn test_start_round_every_difficulty() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(42));

    for d in Difficulty::ALL {
        let round = engine.start_round(&mut session, d);
        assert_eq!(round.colors().len(), d.tile_count());
        assert!(round.target_index() < d.tile_count());
    }
}

#[test]
fn test_target_code_format() {
    let mut source = Cycle::new(&[
        12.0 / 256.0, 200.0 / 256.0, 88.0 / 256.0, //
        0.0, 0.0, 0.0, //
        1.0 / 256.0, 2.0 / 256.0, 3.0 / 256.0, //
        0.0,
    ]);
    let round = RoundState::generate(Difficulty::Easy, &mut source);

    assert_eq!(round.colors()[1], Rgb::new(0, 0, 0));
    assert_eq!(round.colors()[2], Rgb::new(1, 2, 3));
    assert_eq!(round.target_index(), 0);
    assert_eq!(round.target_code(), "rgb(12, 200, 88)");
}

#[test]
fn test_duplicate_target_color_matched_by_position() {
    // Every tile gets the same color; only the target position counts.
    let round = RoundState::generate(Difficulty::Easy, &mut Cycle::new(&[0.5]));
    assert_eq!(round.colors()[0], round.colors()[2]);
    assert_eq!(round.target_index(), 1);

    assert!(round.is_target(1));
    assert!(!round.is_target(0));
    assert!(!round.is_target(2));
}

// =============================================================================
// Scenarios
// =============================================================================

/// Easy, five wrong guesses: health 5 -> 0, last result is game over.
#[test]
fn test_easy_five_misses_ends_game() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(7));
    assert_eq!(session.difficulty(), Difficulty::Easy);

    let mut healths = vec![session.health()];
    let mut last = None;
    for _ in 0..5 {
        let wrong = wrong_index(&session);
        last = Some(engine.evaluate_guess(&mut session, wrong).unwrap());
        healths.push(session.health());
    }

    assert_eq!(healths, vec![5, 4, 3, 2, 1, 0]);
    assert_eq!(last, Some(GuessResult::GameOver { final_score: 0 }));
}

/// Pro, two correct guesses: score 0 -> 1 -> 2, health untouched.
#[test]
fn test_pro_two_hits() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(99));
    engine.set_difficulty(&mut session, Difficulty::Pro);

    let first = session.round().clone();
    let target = first.target_index();
    assert!(engine.evaluate_guess(&mut session, target).unwrap().is_correct());
    assert_eq!(session.score(), 1);

    let second = session.round().clone();
    assert_ne!(first, second);
    let target = second.target_index();
    assert!(engine.evaluate_guess(&mut session, target).unwrap().is_correct());
    assert_eq!(session.score(), 2);

    assert_ne!(session.round(), &second);
    assert_eq!(session.round().tile_count(), 9);
    assert_eq!(session.health(), 5);
}

#[test]
fn test_out_of_range_index_rejected() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(3));
    let before = session.round().clone();
    let count = before.tile_count();

    assert_eq!(
        engine.evaluate_guess(&mut session, count),
        Err(GameError::InvalidIndex { index: count as i64, tile_count: count })
    );
    assert_eq!(
        engine.evaluate_guess(&mut session, usize::MAX),
        Err(GameError::InvalidIndex { index: i64::MAX, tile_count: count })
    );

    assert_eq!(session.round(), &before);
    assert_eq!(session.score(), 0);
    assert_eq!(session.health(), 5);
    assert_eq!(session.phase(), GamePhase::Playing);
}

/// A position of -1 is rejected and leaves the session as it was.
#[test]
fn test_minus_one_rejected() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(3));
    let before = session.round().clone();

    assert_eq!(
        engine.evaluate_tile(&mut session, -1),
        Err(GameError::InvalidIndex { index: -1, tile_count: 3 })
    );
    assert_eq!(
        engine.evaluate_tile(&mut session, 3),
        Err(GameError::InvalidIndex { index: 3, tile_count: 3 })
    );

    assert_eq!(session.round(), &before);
    assert_eq!(session.score(), 0);
    assert_eq!(session.health(), 5);
    assert_eq!(session.phase(), GamePhase::Playing);
}

#[test]
fn test_game_over_then_new_game() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(11));

    // Score a few points first.
    for _ in 0..3 {
        let target = session.round().target_index();
        engine.evaluate_guess(&mut session, target).unwrap();
    }

    let mut result = None;
    while !session.is_game_over() {
        let wrong = wrong_index(&session);
        result = Some(engine.evaluate_guess(&mut session, wrong).unwrap());
    }
    assert_eq!(result, Some(GuessResult::GameOver { final_score: 3 }));

    // Final values stay visible until the screen is dismissed.
    assert_eq!(session.score(), 3);
    assert_eq!(session.health(), 0);

    assert!(engine.dismiss_game_over(&mut session));
    assert_eq!(session.score(), 0);
    assert_eq!(session.health(), 5);
    assert_eq!(session.difficulty(), Difficulty::Easy);
    assert_eq!(session.round().tile_count(), 3);
}

#[test]
fn test_hard_always_six_tiles() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(5));

    engine.set_difficulty(&mut session, Difficulty::Pro);
    assert_eq!(engine.set_difficulty(&mut session, Difficulty::Hard).tile_count(), 6);

    let wrong = wrong_index(&session);
    engine.evaluate_guess(&mut session, wrong).unwrap();
    assert_eq!(engine.set_difficulty(&mut session, Difficulty::Hard).tile_count(), 6);
}

// =============================================================================
// Reset Rules
// =============================================================================

#[test]
fn test_reset_table() {
    let engine = GameEngine::new(GameConfig::new().with_max_health(5)).unwrap();
    let mut session = engine.new_session(GameRng::new(21));

    // Correct guess: score +1, health same, new round.
    let before = session.round().clone();
    engine.evaluate_guess(&mut session, before.target_index()).unwrap();
    assert_eq!((session.score(), session.health()), (1, 5));
    assert_ne!(session.round(), &before);

    // Incorrect guess: health -1, same round.
    let before = session.round().clone();
    let wrong = wrong_index(&session);
    engine.evaluate_guess(&mut session, wrong).unwrap();
    assert_eq!((session.score(), session.health()), (1, 4));
    assert_eq!(session.round(), &before);

    // Reshuffle: nothing but the round changes.
    engine.reshuffle(&mut session).unwrap();
    assert_eq!((session.score(), session.health()), (1, 4));
    assert_ne!(session.round(), &before);

    // Difficulty change: everything resets.
    engine.set_difficulty(&mut session, Difficulty::Hard);
    assert_eq!((session.score(), session.health()), (0, 5));
}

#[test]
fn test_custom_health_pool() {
    let engine = GameEngine::new(GameConfig::new().with_max_health(2)).unwrap();
    let mut session = engine.new_session(GameRng::new(4));

    let wrong = wrong_index(&session);
    assert_eq!(
        engine.evaluate_guess(&mut session, wrong),
        Ok(GuessResult::Incorrect { health_remaining: 1 })
    );
    assert_eq!(
        engine.evaluate_guess(&mut session, wrong),
        Ok(GuessResult::GameOver { final_score: 0 })
    );
}

#[test]
fn test_rng_checkpoint_replays_rounds() {
    let engine = GameEngine::default();
    let mut session = engine.new_session(GameRng::new(77));
    let checkpoint = session.rng.state();

    let a = engine.reshuffle(&mut session).unwrap().clone();

    session.rng = GameRng::from_state(&checkpoint);
    let b = engine.reshuffle(&mut session).unwrap().clone();

    assert_eq!(a, b);
}
