//! Asset loading: the character roster and sprite textures
//!
//! Every load is allowed to fail. A missing roster file falls back to the
//! built-in characters; a missing sprite falls back to shape rendering.
//! Failures are logged once and never retried.

use macroquad::prelude::*;

use crate::config::{default_roster, CharacterDef};

/// Path of the coin sprite
const COIN_SPRITE: &str = "assets/sprites/coin.png";
/// Path of the character roster file
const ROSTER_FILE: &str = "assets/characters.ron";

/// Loaded sprite handles. None means the load failed and the fallback
/// shape is drawn instead.
pub struct Sprites {
    characters: Vec<Option<Texture2D>>,
    coin: Option<Texture2D>,
}

impl Sprites {
    /// No sprites at all; everything renders as fallback shapes
    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self {
            characters: Vec::new(),
            coin: None,
        }
    }

    /// Sprite for a roster entry, if it loaded
    pub fn character(&self, index: usize) -> Option<&Texture2D> {
        self.characters.get(index).and_then(|texture| texture.as_ref())
    }

    /// The coin sprite, if it loaded
    pub fn coin(&self) -> Option<&Texture2D> {
        self.coin.as_ref()
    }
}

/// Load the character roster, falling back to the built-in set
pub async fn load_roster() -> Vec<CharacterDef> {
    match load_string(ROSTER_FILE).await {
        Ok(text) => match ron::from_str::<Vec<CharacterDef>>(&text) {
            Ok(roster) if !roster.is_empty() => roster,
            Ok(_) => {
                println!("{} lists no characters, using built-in roster", ROSTER_FILE);
                default_roster()
            }
            Err(e) => {
                println!("Failed to parse {}: {}, using built-in roster", ROSTER_FILE, e);
                default_roster()
            }
        },
        Err(e) => {
            println!("Failed to load {}: {}, using built-in roster", ROSTER_FILE, e);
            default_roster()
        }
    }
}

/// Load every character sprite plus the coin sprite
pub async fn load_sprites(roster: &[CharacterDef]) -> Sprites {
    let mut characters = Vec::with_capacity(roster.len());
    for def in roster {
        characters.push(load_sprite(&def.sprite).await);
    }
    Sprites {
        characters,
        coin: load_sprite(COIN_SPRITE).await,
    }
}

/// Load one texture, warning on failure
async fn load_sprite(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            Some(texture)
        }
        Err(e) => {
            println!("Failed to load {}: {}, drawing a shape instead", path, e);
            None
        }
    }
}
