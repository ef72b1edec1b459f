//! Player movement and jump physics

use crate::config::{GRAVITY, GROUND_Y, JUMP_SPEED, PLAYER_SIZE, PLAYER_SPEED, SCREEN_WIDTH};
use crate::input::InputSnapshot;
use crate::ui::Rect;

/// The player-controlled character
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity, only meaningful while jumping
    pub vy: f32,
    pub jumping: bool,
}

impl Player {
    /// Spawn standing on the ground at the horizontal center
    pub fn new() -> Self {
        Self {
            x: SCREEN_WIDTH / 2.0,
            y: GROUND_Y,
            vy: 0.0,
            jumping: false,
        }
    }

    /// Apply one tick of input and physics
    ///
    /// Horizontal movement applies left then right (both keys may apply in
    /// the same tick) and clamps to the canvas. A jump can only start on
    /// the ground; the jump key is ignored while airborne. Vertical motion
    /// is plain Euler integration, one step per tick, clamped on landing.
    pub fn step(&mut self, input: &InputSnapshot) {
        let max_x = SCREEN_WIDTH - PLAYER_SIZE;
        if input.left {
            self.x = (self.x - PLAYER_SPEED).max(0.0);
        }
        if input.right {
            self.x = (self.x + PLAYER_SPEED).min(max_x);
        }

        if input.jump && !self.jumping {
            self.vy = JUMP_SPEED;
            self.jumping = true;
        }

        if self.jumping {
            self.vy += GRAVITY;
            self.y += self.vy;
            if self.y >= GROUND_Y {
                self.y = GROUND_Y;
                self.vy = 0.0;
                self.jumping = false;
            }
        }
    }

    /// Bounding box used for coin collection
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}
