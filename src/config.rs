//! Gameplay constants and the playable character roster
//!
//! Everything here is per-tick: one tick is one display frame, and the
//! movement constants are tuned for that cadence. The round clock is the
//! one exception (wall-clock seconds, see the round module).

use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

/// Logical canvas size in pixels. The window is created at exactly this size.
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Round length in seconds
pub const TOTAL_TIME: f64 = 45.0;

/// Edge length of the player's square sprite
pub const PLAYER_SIZE: f32 = 50.0;
/// Horizontal speed in pixels per tick
pub const PLAYER_SPEED: f32 = 8.0;
/// Vertical velocity at the start of a jump (negative = up)
pub const JUMP_SPEED: f32 = -18.0;
/// Added to vertical velocity every tick while airborne
pub const GRAVITY: f32 = 0.8;

/// Edge length of a coin sprite
pub const COIN_SIZE: f32 = 45.0;
/// Coin fall speed in pixels per tick
pub const COIN_FALL_SPEED: f32 = 5.0;
/// A coin spawns each tick with probability 1 / COIN_SPAWN_RATE
pub const COIN_SPAWN_RATE: f32 = 30.0;
/// Score awarded per caught coin
pub const COIN_REWARD: u32 = 10;

/// Gap between the player's feet and the bottom edge
pub const GROUND_MARGIN: f32 = 10.0;
/// Y of the player's top edge while standing on the ground
pub const GROUND_Y: f32 = SCREEN_HEIGHT - PLAYER_SIZE - GROUND_MARGIN;

/// A playable character: display name, fallback tint, and sprite path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterDef {
    pub name: String,
    pub tint: (u8, u8, u8),
    pub sprite: String,
}

impl CharacterDef {
    /// Color used wherever the character's sprite is not available
    pub fn color(&self) -> Color {
        Color::from_rgba(self.tint.0, self.tint.1, self.tint.2, 255)
    }
}

/// Built-in roster used when assets/characters.ron is missing or malformed
pub fn default_roster() -> Vec<CharacterDef> {
    vec![
        CharacterDef {
            name: "Cat".to_string(),
            tint: (255, 50, 50),
            sprite: "assets/sprites/cat.png".to_string(),
        },
        CharacterDef {
            name: "Cute".to_string(),
            tint: (50, 255, 50),
            sprite: "assets/sprites/cute.png".to_string(),
        },
        CharacterDef {
            name: "Ghost".to_string(),
            tint: (50, 50, 255),
            sprite: "assets/sprites/ghost.png".to_string(),
        },
    ]
}
