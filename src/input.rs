//! Keyboard input
//!
//! Maps physical keys onto logical actions and captures the held state once
//! per tick. Round logic only ever sees snapshots, never the keyboard.

use macroquad::prelude::*;

/// In-round actions the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    /// Physical keys bound to this action
    fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::Jump => &[KeyCode::Space, KeyCode::Up],
        }
    }
}

/// Polls the keyboard through macroquad
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Check if an action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        action.keys().iter().any(|&key| is_key_down(key))
    }

    /// Capture the held state of every in-round action for this tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            jump: self.action_down(Action::Jump),
        }
    }
}

/// Held state of the in-round actions at the start of a tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}
