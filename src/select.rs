//! Character selection screen

use macroquad::prelude::*;

use crate::assets::Sprites;
use crate::config::{CharacterDef, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ui::{draw_rounded_rect, draw_text_centered, Rect};

const BG_COLOR: Color = Color::new(0.10, 0.10, 0.14, 1.0);
const CARD_BG: Color = Color::new(0.16, 0.16, 0.20, 1.0);
const CARD_HOT: Color = Color::new(0.22, 0.24, 0.32, 1.0);
const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);
const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.9, 1.0);
const MUTED_COLOR: Color = Color::new(0.6, 0.6, 0.65, 1.0);

const CARD_W: f32 = 180.0;
const CARD_H: f32 = 240.0;
const CARD_GAP: f32 = 40.0;
const PREVIEW_SIZE: f32 = 100.0;

/// Selection screen state: which card the keyboard cursor is on
pub struct SelectState {
    pub selected: usize,
}

impl SelectState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Move the cursor left, wrapping around
    pub fn move_left(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Move the cursor right, wrapping around
    pub fn move_right(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }
}

/// What the selection screen wants the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    None,
    /// Start a round with this roster index
    Start(usize),
}

/// Draw the selection screen and handle its input for this frame
pub fn draw_select(state: &mut SelectState, roster: &[CharacterDef], sprites: &Sprites) -> SelectAction {
    clear_background(BG_COLOR);

    draw_text_centered("COIN RUSH", SCREEN_WIDTH / 2.0, 110.0, 48.0, ACCENT_COLOR);
    draw_text_centered("Pick your character", SCREEN_WIDTH / 2.0, 150.0, 22.0, MUTED_COLOR);

    if is_key_pressed(KeyCode::Left) {
        state.move_left(roster.len());
    }
    if is_key_pressed(KeyCode::Right) {
        state.move_right(roster.len());
    }

    let mut action = SelectAction::None;
    if is_key_pressed(KeyCode::Enter) {
        action = SelectAction::Start(state.selected);
    }

    let (mx, my) = mouse_position();
    let clicked = is_mouse_button_pressed(MouseButton::Left);

    for (index, def) in roster.iter().enumerate() {
        let rect = card_rect(index, roster.len());
        let hovered = rect.contains(mx, my);

        let bg = if index == state.selected || hovered { CARD_HOT } else { CARD_BG };
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 10.0, bg);
        if index == state.selected {
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 3.0, ACCENT_COLOR);
        }

        // Sprite preview, tinted square when the sprite is missing
        let px = rect.center_x() - PREVIEW_SIZE / 2.0;
        let py = rect.y + 30.0;
        if let Some(texture) = sprites.character(index) {
            draw_texture_ex(
                texture,
                px,
                py,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(PREVIEW_SIZE, PREVIEW_SIZE)),
                    ..Default::default()
                },
            );
        } else {
            draw_rounded_rect(px, py, PREVIEW_SIZE, PREVIEW_SIZE, 8.0, def.color());
        }

        draw_text_centered(&def.name, rect.center_x(), rect.y + 180.0, 26.0, TEXT_COLOR);

        // Clicking a card selects and starts in one go
        if clicked && hovered {
            state.selected = index;
            action = SelectAction::Start(index);
        }
    }

    draw_text_centered(
        "Arrows to choose, Enter to start, or click a card",
        SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT - 60.0,
        18.0,
        MUTED_COLOR,
    );

    action
}

/// Layout: cards in one centered row
fn card_rect(index: usize, count: usize) -> Rect {
    let total = count as f32 * CARD_W + (count.saturating_sub(1)) as f32 * CARD_GAP;
    let x0 = (SCREEN_WIDTH - total) / 2.0;
    Rect::new(
        x0 + index as f32 * (CARD_W + CARD_GAP),
        (SCREEN_HEIGHT - CARD_H) / 2.0,
        CARD_W,
        CARD_H,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = SelectState::new();
        state.move_left(3);
        assert_eq!(state.selected, 2);
        state.move_right(3);
        assert_eq!(state.selected, 0);
        state.move_right(3);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn empty_roster_is_harmless() {
        let mut state = SelectState::new();
        state.move_left(0);
        state.move_right(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn cards_do_not_overlap() {
        for i in 0..2 {
            let a = card_rect(i, 3);
            let b = card_rect(i + 1, 3);
            assert!(a.right() < b.x);
            assert!(!a.overlaps(&b));
        }
    }

    #[test]
    fn card_row_is_centered() {
        let first = card_rect(0, 3);
        let last = card_rect(2, 3);
        let left_margin = first.x;
        let right_margin = SCREEN_WIDTH - last.right();
        assert!((left_margin - right_margin).abs() < 0.001);
    }
}
