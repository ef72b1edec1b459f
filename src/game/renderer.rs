//! Draws the round: background, player, coins, and the HUD
//!
//! Pure read of round state, no mutation. Sprites that failed to load are
//! replaced by shapes in the character's tint (player) or gold (coins).

use macroquad::prelude::*;

use crate::assets::Sprites;
use crate::config::{CharacterDef, COIN_SIZE, PLAYER_SIZE, SCREEN_WIDTH};
use crate::ui::draw_rounded_rect;

use super::Round;

/// Sky background
const BACKGROUND: Color = Color::new(0.53, 0.81, 0.92, 1.0);
/// Fallback coin fill
const COIN_GOLD: Color = Color::new(1.0, 0.84, 0.0, 1.0);
/// Timer color in the final stretch
const WARNING: Color = Color::new(1.0, 0.27, 0.27, 1.0);

/// Corner radius of the fallback player square
const PLAYER_CORNER: f32 = 8.0;
/// Seconds left at which the timer starts warning
const WARNING_SECONDS: u32 = 10;
const HUD_FONT_SIZE: f32 = 28.0;

/// Render the whole round
pub fn draw_round(round: &Round, roster: &[CharacterDef], sprites: &Sprites) {
    clear_background(BACKGROUND);

    draw_player(round, roster, sprites);
    for coin in &round.coins {
        draw_coin(coin.x, coin.y, sprites);
    }
    draw_hud(round);
}

fn draw_player(round: &Round, roster: &[CharacterDef], sprites: &Sprites) {
    let player = &round.player;
    if let Some(texture) = sprites.character(round.character) {
        draw_texture_ex(
            texture,
            player.x,
            player.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(PLAYER_SIZE, PLAYER_SIZE)),
                ..Default::default()
            },
        );
    } else {
        let tint = roster
            .get(round.character)
            .map(|def| def.color())
            .unwrap_or(WHITE);
        draw_rounded_rect(player.x, player.y, PLAYER_SIZE, PLAYER_SIZE, PLAYER_CORNER, tint);
    }
}

fn draw_coin(x: f32, y: f32, sprites: &Sprites) {
    if let Some(texture) = sprites.coin() {
        draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(COIN_SIZE, COIN_SIZE)),
                ..Default::default()
            },
        );
    } else {
        let r = COIN_SIZE / 2.0;
        draw_circle(x + r, y + r, r, COIN_GOLD);
        draw_circle_lines(x + r, y + r, r, 2.0, BLACK);
    }
}

/// Score top-left, clock top-right
fn draw_hud(round: &Round) {
    draw_text(&format!("Score: {}", round.score()), 16.0, 34.0, HUD_FONT_SIZE, WHITE);

    let timer_color = if round.time_left() <= WARNING_SECONDS {
        WARNING
    } else {
        WHITE
    };
    let label = format!("Time: {}", round.time_left());
    let dims = measure_text(&label, None, HUD_FONT_SIZE as u16, 1.0);
    draw_text(&label, SCREEN_WIDTH - dims.width - 16.0, 34.0, HUD_FONT_SIZE, timer_color);
}
