//! Screen state machine and top-level application state
//!
//! One screen is active at a time; the frame loop in main dispatches to the
//! active screen. The live round is owned here so a retry can rebuild it
//! without touching the other screens.

use crate::assets::Sprites;
use crate::config::CharacterDef;
use crate::game::Round;
use crate::game_over::GameOverState;
use crate::select::SelectState;

/// The screens the app can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CharacterSelect,
    Playing,
    GameOver,
}

/// Top-level application state
pub struct AppState {
    pub screen: Screen,
    pub roster: Vec<CharacterDef>,
    pub sprites: Sprites,
    /// Roster index the last round was started with (retry reuses it)
    pub selected_character: usize,
    pub select: SelectState,
    /// The live round, Some only while on the game screen
    pub round: Option<Round>,
    pub game_over: GameOverState,
}

impl AppState {
    pub fn new(roster: Vec<CharacterDef>, sprites: Sprites) -> Self {
        Self {
            screen: Screen::CharacterSelect,
            roster,
            sprites,
            selected_character: 0,
            select: SelectState::new(),
            round: None,
            game_over: GameOverState::new(0, 0.0),
        }
    }

    /// Start a fresh round with the given character
    pub fn start_round(&mut self, character: usize, now: f64) {
        self.selected_character = character;
        let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
        self.round = Some(Round::new(character, now, seed));
        self.screen = Screen::Playing;
    }

    /// Freeze the finished round's score and move to the result screen
    pub fn finish_round(&mut self, now: f64) {
        let score = self.round.as_ref().map(|round| round.score()).unwrap_or(0);
        self.game_over = GameOverState::new(score, now);
        self.round = None;
        self.screen = Screen::GameOver;
    }

    /// Back to the character menu, dropping any round state
    pub fn back_to_select(&mut self) {
        self.select = SelectState::new();
        self.round = None;
        self.screen = Screen::CharacterSelect;
    }
}
