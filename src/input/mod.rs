//! Input dispatch and the renderer interface.
//!
//! The engine never draws anything. A front end implements `Renderer`,
//! wraps it in a `Dispatcher`, and forwards raw input as `InputEvent`s:
//!
//! ```
//! use color_match::core::{Difficulty, GameRng};
//! use color_match::input::{Dispatcher, Feedback, InputEvent, Renderer};
//! use color_match::core::SessionView;
//! use color_match::rules::GameEngine;
//!
//! #[derive(Default)]
//! struct Headless {
//!     tiles: usize,
//! }
//!
//! impl Renderer for Headless {
//!     fn render_round(&mut self, view: &SessionView) {
//!         self.tiles = view.colors.len();
//!     }
//!     fn show_feedback(&mut self, _feedback: &Feedback) {}
//!     fn show_game_over(&mut self, _final_score: u32) {}
//!     fn hide_game_over(&mut self) {}
//! }
//!
//! let session = GameEngine::default().new_session(GameRng::new(42));
//! let mut dispatcher = Dispatcher::new(GameEngine::default(), session, Headless::default());
//! dispatcher.start();
//! assert_eq!(dispatcher.renderer().tiles, 3);
//!
//! dispatcher.dispatch(InputEvent::ModeSelected(Difficulty::Pro)).unwrap();
//! assert_eq!(dispatcher.renderer().tiles, 9);
//! ```

mod dispatch;
mod event;

pub use dispatch::Dispatcher;
pub use event::{Feedback, InputEvent, LABEL_RESHUFFLE};

use crate::core::SessionView;

/// Display side of the game.
///
/// All calls happen after the engine has finished its state change, so
/// the renderer always sees a consistent session. Animation and timed
/// message clearing are the renderer's own business.
pub trait Renderer {
    /// Redraw the tiles, target code, score and health indicators.
    fn render_round(&mut self, view: &SessionView);

    /// Show the result of the last input.
    fn show_feedback(&mut self, feedback: &Feedback);

    /// Show the game-over screen with the score reached.
    fn show_game_over(&mut self, final_score: u32);

    /// Close the game-over screen.
    fn hide_game_over(&mut self);

    /// Update the reshuffle button caption.
    ///
    /// Default does nothing for renderers with a fixed caption.
    fn set_reset_label(&mut self, _label: &str) {}
}
