//! Result screen: score verdict, reveal countdown, retry dialog
//!
//! The result card is shown alone for a few seconds before the retry
//! dialog appears; retry/quit input only counts once the dialog is visible.

use macroquad::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::{draw_rounded_rect, draw_text_centered, text_button, Rect};

const BG_COLOR: Color = Color::new(0.10, 0.10, 0.14, 1.0);
const PANEL_COLOR: Color = Color::new(0.16, 0.16, 0.20, 1.0);
const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);
const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const MUTED_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);
const RETRY_COLOR: Color = Color::new(0.13, 0.55, 0.25, 1.0);
const QUIT_COLOR: Color = Color::new(0.60, 0.16, 0.16, 1.0);

/// Seconds the result is shown before the retry dialog appears
const REVEAL_DELAY: f64 = 3.0;

/// Counts down to a single deadline
#[derive(Debug, Clone, Copy)]
pub struct RevealTimer {
    deadline: f64,
}

impl RevealTimer {
    pub fn new(now: f64, delay: f64) -> Self {
        Self { deadline: now + delay }
    }

    pub fn done(&self, now: f64) -> bool {
        now >= self.deadline
    }

    /// Whole seconds left, clamped at zero
    pub fn remaining(&self, now: f64) -> u32 {
        (self.deadline - now).ceil().max(0.0) as u32
    }
}

/// Result screen state: a frozen copy of the finished round's score
pub struct GameOverState {
    pub final_score: u32,
    reveal: RevealTimer,
}

impl GameOverState {
    pub fn new(final_score: u32, now: f64) -> Self {
        Self {
            final_score,
            reveal: RevealTimer::new(now, REVEAL_DELAY),
        }
    }

    /// Verdict shown on the result card
    pub fn verdict(&self) -> &'static str {
        if self.final_score < 300 {
            "Rough run"
        } else if self.final_score <= 500 {
            "Not bad"
        } else {
            "Great run!"
        }
    }
}

/// What the result screen wants the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverAction {
    None,
    /// Start a fresh round with the same character
    Retry,
    /// Back to character select
    Quit,
}

/// Draw the result screen and handle its input for this frame
pub fn draw_game_over(state: &GameOverState, now: f64) -> GameOverAction {
    clear_background(BG_COLOR);

    let center = SCREEN_WIDTH / 2.0;
    draw_text_centered("TIME'S UP", center, 140.0, 48.0, ACCENT_COLOR);

    if !state.reveal.done(now) {
        draw_text_centered(state.verdict(), center, 260.0, 40.0, TEXT_COLOR);
        draw_text_centered(
            &format!("Final score: {}", state.final_score),
            center,
            310.0,
            30.0,
            TEXT_COLOR,
        );
        draw_text_centered(
            &format!("Menu in {}...", state.reveal.remaining(now)),
            center,
            SCREEN_HEIGHT - 120.0,
            20.0,
            MUTED_COLOR,
        );
        return GameOverAction::None;
    }

    draw_text_centered(
        &format!("Final score: {}", state.final_score),
        center,
        230.0,
        30.0,
        TEXT_COLOR,
    );

    let dialog = Rect::new(center - 190.0, 290.0, 380.0, 160.0);
    draw_rounded_rect(dialog.x, dialog.y, dialog.w, dialog.h, 10.0, PANEL_COLOR);
    draw_text_centered("Play again?", center, dialog.y + 45.0, 26.0, TEXT_COLOR);

    let retry = Rect::new(dialog.x + 30.0, dialog.y + 90.0, 150.0, 44.0);
    let quit = Rect::new(dialog.right() - 180.0, dialog.y + 90.0, 150.0, 44.0);

    let retry_clicked = text_button(&retry, "Retry", RETRY_COLOR);
    let quit_clicked = text_button(&quit, "Quit", QUIT_COLOR);

    if retry_clicked || is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::R) {
        GameOverAction::Retry
    } else if quit_clicked || is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
        GameOverAction::Quit
    } else {
        GameOverAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_timer_counts_down() {
        let timer = RevealTimer::new(10.0, 3.0);
        assert!(!timer.done(10.0));
        assert_eq!(timer.remaining(10.0), 3);
        assert_eq!(timer.remaining(11.5), 2);
        assert!(timer.done(13.0));
        assert_eq!(timer.remaining(13.0), 0);
        // Never negative, no matter how late
        assert_eq!(timer.remaining(100.0), 0);
    }

    #[test]
    fn verdict_tiers() {
        assert_eq!(GameOverState::new(0, 0.0).verdict(), "Rough run");
        assert_eq!(GameOverState::new(290, 0.0).verdict(), "Rough run");
        assert_eq!(GameOverState::new(300, 0.0).verdict(), "Not bad");
        assert_eq!(GameOverState::new(500, 0.0).verdict(), "Not bad");
        assert_eq!(GameOverState::new(510, 0.0).verdict(), "Great run!");
    }
}
