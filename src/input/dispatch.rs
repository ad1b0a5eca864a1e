//! Routes input events to the engine and reflects the result on a renderer.

use log::{debug, warn};

use crate::core::{GameError, GameSession};
use crate::rules::{GameEngine, GuessResult};

use super::event::{Feedback, InputEvent, LABEL_RESHUFFLE};
use super::Renderer;

/// Input-dispatch layer for one session.
///
/// Owns the engine, the session and the renderer. Each `dispatch` call
/// runs one engine operation to completion, then updates the renderer.
/// Rejected input leaves both the session and the display untouched.
pub struct Dispatcher<R: Renderer> {
    engine: GameEngine,
    session: GameSession,
    renderer: R,
}

impl<R: Renderer> Dispatcher<R> {
    pub fn new(engine: GameEngine, session: GameSession, renderer: R) -> Self {
        Self {
            engine,
            session,
            renderer,
        }
    }

    /// Draw the initial board.
    pub fn start(&mut self) {
        self.renderer.render_round(&self.session.view());
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Give back the parts.
    pub fn into_parts(self) -> (GameEngine, GameSession, R) {
        (self.engine, self.session, self.renderer)
    }

    /// Handle one input event.
    ///
    /// Returns the guess result for tile clicks and `None` for everything
    /// else.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Option<GuessResult>, GameError> {
        debug!("dispatch {event:?}");
        let outcome = match event {
            InputEvent::TileClicked(index) => self.tile_clicked(index).map(Some),
            InputEvent::ModeSelected(difficulty) => {
                let was_over = self.session.is_game_over();
                self.engine.set_difficulty(&mut self.session, difficulty);
                if was_over {
                    self.renderer.hide_game_over();
                }
                self.renderer.render_round(&self.session.view());
                Ok(None)
            }
            InputEvent::ReshuffleRequested => self.reshuffle().map(|()| None),
            InputEvent::GameOverDismissed => {
                if self.engine.dismiss_game_over(&mut self.session) {
                    self.renderer.hide_game_over();
                    self.renderer.render_round(&self.session.view());
                }
                Ok(None)
            }
        };

        if let Err(err) = &outcome {
            warn!("rejected {event:?}: {err}");
        }
        outcome
    }

    fn reshuffle(&mut self) -> Result<(), GameError> {
        self.engine.reshuffle(&mut self.session)?;
        self.renderer.render_round(&self.session.view());
        self.renderer.set_reset_label(LABEL_RESHUFFLE);
        self.renderer.show_feedback(&Feedback::Cleared);
        Ok(())
    }

    fn tile_clicked(&mut self, index: usize) -> Result<GuessResult, GameError> {
        let result = self.engine.evaluate_guess(&mut self.session, index)?;

        match result {
            GuessResult::Correct { color } => {
                self.renderer.show_feedback(&Feedback::Correct { color });
                self.renderer.render_round(&self.session.view());
            }
            GuessResult::Incorrect { .. } => {
                self.renderer.show_feedback(&Feedback::TryAgain { tile: index });
                self.renderer.render_round(&self.session.view());
            }
            GuessResult::GameOver { final_score } => {
                self.renderer.show_feedback(&Feedback::Cleared);
                self.renderer.render_round(&self.session.view());
                self.renderer.show_game_over(final_score);
            }
        }
        Ok(result)
    }
}
