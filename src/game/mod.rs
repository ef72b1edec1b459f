//! The playable round: player physics, falling coins, clock, rendering
//!
//! All round state lives in [`Round`]; the frame loop calls [`Round::tick`]
//! and then [`draw_round`] once per display frame.

mod coin;
mod player;
mod renderer;
mod round;

pub use coin::Coin;
pub use player::Player;
pub use renderer::draw_round;
pub use round::{Phase, Round};
