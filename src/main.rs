//! COIN RUSH: a jump-and-catch arcade game
//!
//! Pick a character, then catch falling coins for 45 seconds. One update
//! and one render per display frame; the round clock runs on wall-clock
//! time. Runs natively and in the browser (WASM) through macroquad.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod config;
mod game;
mod game_over;
mod input;
mod select;
mod ui;

use macroquad::prelude::*;

use app::{AppState, Screen};
use game_over::GameOverAction;
use input::InputState;
use select::SelectAction;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Coin Rush v{}", VERSION),
        window_width: config::SCREEN_WIDTH as i32,
        window_height: config::SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging first (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let roster = assets::load_roster().await;
    let sprites = assets::load_sprites(&roster).await;
    let input = InputState::new();
    let mut app = AppState::new(roster, sprites);

    loop {
        match app.screen {
            Screen::CharacterSelect => {
                match select::draw_select(&mut app.select, &app.roster, &app.sprites) {
                    SelectAction::Start(index) => app.start_round(index, get_time()),
                    SelectAction::None => {}
                }
            }
            Screen::Playing => {
                let now = get_time();
                if let Some(round) = app.round.as_mut() {
                    round.tick(&input.snapshot(), now);
                    game::draw_round(round, &app.roster, &app.sprites);
                    if round.is_over() {
                        app.finish_round(now);
                    }
                } else {
                    // No live round on the game screen; recover to the menu
                    app.back_to_select();
                }
            }
            Screen::GameOver => {
                let now = get_time();
                match game_over::draw_game_over(&app.game_over, now) {
                    GameOverAction::Retry => app.start_round(app.selected_character, now),
                    GameOverAction::Quit => app.back_to_select(),
                    GameOverAction::None => {}
                }
            }
        }

        next_frame().await;
    }
}
