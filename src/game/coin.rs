//! Falling coins: spawning, motion, and collection

use rand::Rng;

use crate::config::{
    COIN_FALL_SPEED, COIN_REWARD, COIN_SIZE, COIN_SPAWN_RATE, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::ui::Rect;

/// One falling coin
#[derive(Debug, Clone)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
}

impl Coin {
    /// Spawn just above the top edge at a random horizontal position
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..SCREEN_WIDTH - COIN_SIZE),
            y: -COIN_SIZE,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }
}

/// Roll the per-tick spawn chance: expected one coin every
/// COIN_SPAWN_RATE ticks, geometric inter-arrival times
pub fn spawn_roll(rng: &mut impl Rng) -> bool {
    rng.gen::<f32>() < 1.0 / COIN_SPAWN_RATE
}

/// Advance every coin by one tick and collect the ones the player touches
///
/// Each coin falls first and is then tested against the player box at its
/// advanced position. A caught coin is removed and scores; an uncaught coin
/// is removed once it reaches the bottom edge. One pass, overlap tested
/// before the off-screen check, so a coin can never do both in one tick.
/// Returns the score gained this tick.
pub fn fall_and_collect(coins: &mut Vec<Coin>, player_box: &Rect) -> u32 {
    let mut gained = 0;
    coins.retain_mut(|coin| {
        coin.y += COIN_FALL_SPEED;
        if coin.bounds().overlaps(player_box) {
            gained += COIN_REWARD;
            return false;
        }
        coin.y < SCREEN_HEIGHT
    });
    gained
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A player box far away from every test coin
    fn far_box() -> Rect {
        Rect::new(700.0, 500.0, 50.0, 50.0)
    }

    #[test]
    fn spawns_inside_the_canvas() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let coin = Coin::spawn(&mut rng);
            assert!(coin.x >= 0.0 && coin.x < SCREEN_WIDTH - COIN_SIZE);
            assert_eq!(coin.y, -COIN_SIZE);
        }
    }

    #[test]
    fn falls_at_constant_speed() {
        let mut coins = vec![Coin { x: 100.0, y: -COIN_SIZE }];
        for _ in 0..120 {
            assert_eq!(fall_and_collect(&mut coins, &far_box()), 0);
        }
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].y, -COIN_SIZE + 120.0 * COIN_FALL_SPEED);
    }

    #[test]
    fn culled_on_reaching_the_bottom() {
        let mut coins = vec![Coin { x: 100.0, y: SCREEN_HEIGHT - COIN_FALL_SPEED }];
        assert_eq!(fall_and_collect(&mut coins, &far_box()), 0);
        assert!(coins.is_empty());
    }

    #[test]
    fn kept_while_still_above_the_bottom() {
        let mut coins = vec![Coin { x: 100.0, y: SCREEN_HEIGHT - COIN_FALL_SPEED - 1.0 }];
        fall_and_collect(&mut coins, &far_box());
        assert_eq!(coins.len(), 1);
    }

    #[test]
    fn caught_coin_scores_and_disappears() {
        let player_box = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Falls from 60 to 65 this tick, overlapping the player's top edge
        let mut coins = vec![Coin { x: 100.0, y: 60.0 }];
        assert_eq!(fall_and_collect(&mut coins, &player_box), COIN_REWARD);
        assert!(coins.is_empty());
    }

    #[test]
    fn collection_uses_the_advanced_position() {
        let player_box = Rect::new(100.0, 100.0, 50.0, 50.0);
        // At y = 51 the coin's bottom (96) is above the player; after
        // falling to 56 the bottom (101) crosses the player's top edge
        let mut coins = vec![Coin { x: 100.0, y: 51.0 }];
        assert_eq!(fall_and_collect(&mut coins, &player_box), COIN_REWARD);
        assert!(coins.is_empty());
    }

    #[test]
    fn only_touching_coins_score() {
        let player_box = Rect::new(100.0, 100.0, 50.0, 50.0);
        let mut coins = vec![
            Coin { x: 100.0, y: 60.0 },  // will overlap
            Coin { x: 400.0, y: 60.0 },  // far to the side
        ];
        assert_eq!(fall_and_collect(&mut coins, &player_box), COIN_REWARD);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].x, 400.0);
    }

    #[test]
    fn spawn_roll_matches_the_expected_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..30_000).filter(|_| spawn_roll(&mut rng)).count();
        // 1/30 chance per tick over 30k ticks: about 1000 spawns
        assert!((800..1200).contains(&hits), "got {} spawns", hits);
    }
}
