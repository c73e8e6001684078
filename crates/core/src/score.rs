//! Score keeping and the game-over latch.

use crate::render::Renderer;
use crate::types::{Color, SCORE_TEXT_FONT_SIZE, SCORE_TEXT_POSITION};

/// Food eaten so far, plus whether the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    score: u32,
    game_over: bool,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// One more food eaten.
    pub fn increase(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Latch the game-over flag.
    ///
    /// The score is kept as-is; only a fresh tracker clears the flag.
    pub fn mark_game_over(&mut self) {
        self.game_over = true;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Text shown in the top-left corner.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::ScoreTracker;
    ///
    /// let mut score = ScoreTracker::new();
    /// score.increase();
    /// assert_eq!(score.display_text(), "Score: 1");
    ///
    /// score.mark_game_over();
    /// assert_eq!(
    ///     score.display_text(),
    ///     "Game over, your score was: 1. Press 'N' to restart."
    /// );
    /// ```
    pub fn display_text(&self) -> String {
        if self.game_over {
            format!(
                "Game over, your score was: {}. Press 'N' to restart.",
                self.score
            )
        } else {
            format!("Score: {}", self.score)
        }
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        let (x, y) = SCORE_TEXT_POSITION;
        renderer.draw_text(
            &self.display_text(),
            x,
            y,
            SCORE_TEXT_FONT_SIZE,
            Color::Text,
        );
    }
}
