use super::{HitBox, Projectile};
use crate::game::HeldKeys;

pub const PLAYER_WIDTH: f32 = 100.0;
pub const PLAYER_HEIGHT: f32 = 100.0;
pub const PLAYER_SPEED: f32 = 3.0;
pub const STARTING_LIVES: u8 = 3;
pub const MAX_LIVES: u8 = 5;

/// Jet-exhaust animation frames. The ship body itself is a single static
/// sprite; only the exhaust changes with the direction of travel.
pub const JETS_LEFT: usize = 0;
pub const JETS_NEUTRAL: usize = 1;
pub const JETS_RIGHT: usize = 2;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub lives: u8,
    pub max_lives: u8,
    pub jets_frame: usize,
}

impl Player {
    pub fn new(game_width: f32, game_height: f32) -> Self {
        Self {
            x: game_width * 0.5 - PLAYER_WIDTH * 0.5,
            y: game_height - PLAYER_HEIGHT,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            lives: STARTING_LIVES,
            max_lives: MAX_LIVES,
            jets_frame: JETS_NEUTRAL,
        }
    }

    /// Applies the currently held keys, then clamps. Holding both
    /// directions applies both moves in the same frame (net zero motion).
    pub fn update(&mut self, held: &HeldKeys, game_width: f32) {
        if held.left {
            self.x -= self.speed;
            self.jets_frame = JETS_LEFT;
        }
        if held.right {
            self.x += self.speed;
            self.jets_frame = JETS_RIGHT;
        }
        if !held.left && !held.right {
            self.jets_frame = JETS_NEUTRAL;
        }

        // boundaries: the ship may hang slightly off either edge
        if self.x < -self.width * 0.45 {
            self.x = -self.width * 0.45;
        } else if self.x > game_width - self.width * 0.55 {
            self.x = game_width - self.width * 0.55;
        }
    }

    /// Claims the first free pool slot and launches it from the ship's
    /// top center. Silently does nothing when the pool is exhausted.
    pub fn shoot(&self, pool: &mut [Projectile]) {
        if let Some(projectile) = pool.iter_mut().find(|p| p.free) {
            projectile.start(self.x + self.width * 0.5, self.y);
        }
    }

    pub fn restart(&mut self, game_width: f32, game_height: f32) {
        self.x = game_width * 0.5 - self.width * 0.5;
        self.y = game_height - self.height;
        self.lives = STARTING_LIVES;
        self.jets_frame = JETS_NEUTRAL;
    }

    pub fn hit_box(&self) -> HitBox {
        HitBox {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GAME_HEIGHT, GAME_WIDTH};

    fn held(left: bool, right: bool) -> HeldKeys {
        HeldKeys { left, right }
    }

    #[test]
    fn test_player_new_is_centered_at_bottom() {
        let player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        assert_eq!(player.x, GAME_WIDTH * 0.5 - PLAYER_WIDTH * 0.5);
        assert_eq!(player.y, GAME_HEIGHT - PLAYER_HEIGHT);
        assert_eq!(player.lives, STARTING_LIVES);
        assert_eq!(player.max_lives, MAX_LIVES);
    }

    #[test]
    fn test_player_moves_left_and_right() {
        let mut player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        let start_x = player.x;

        player.update(&held(true, false), GAME_WIDTH);
        assert_eq!(player.x, start_x - PLAYER_SPEED);
        assert_eq!(player.jets_frame, JETS_LEFT);

        player.update(&held(false, true), GAME_WIDTH);
        assert_eq!(player.x, start_x);
        assert_eq!(player.jets_frame, JETS_RIGHT);
    }

    #[test]
    fn test_both_directions_held_is_net_zero() {
        let mut player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        let start_x = player.x;
        player.update(&held(true, true), GAME_WIDTH);
        assert_eq!(player.x, start_x);
    }

    #[test]
    fn test_jets_reset_to_neutral_when_idle() {
        let mut player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        player.update(&held(true, false), GAME_WIDTH);
        assert_eq!(player.jets_frame, JETS_LEFT);
        player.update(&held(false, false), GAME_WIDTH);
        assert_eq!(player.jets_frame, JETS_NEUTRAL);
    }

    #[test]
    fn test_player_clamps_at_left_edge() {
        let mut player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        player.x = -PLAYER_WIDTH * 0.45 - 1.0;
        player.update(&held(true, false), GAME_WIDTH);
        assert_eq!(player.x, -PLAYER_WIDTH * 0.45);
    }

    #[test]
    fn test_player_clamps_at_right_edge() {
        let mut player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        player.x = GAME_WIDTH;
        player.update(&held(false, true), GAME_WIDTH);
        assert_eq!(player.x, GAME_WIDTH - PLAYER_WIDTH * 0.55);
    }

    #[test]
    fn test_shoot_claims_first_free_slot() {
        let player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        let mut pool = vec![Projectile::new(), Projectile::new()];

        player.shoot(&mut pool);
        assert!(!pool[0].free);
        assert!(pool[1].free);
        assert_eq!(pool[0].x, player.x + player.width * 0.5 - pool[0].width * 0.5);
        assert_eq!(pool[0].y, player.y);

        player.shoot(&mut pool);
        assert!(!pool[1].free);
    }

    #[test]
    fn test_shoot_with_exhausted_pool_is_a_no_op() {
        let player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        let mut pool = vec![Projectile::new()];
        player.shoot(&mut pool);
        let claimed = (pool[0].x, pool[0].y);
        player.shoot(&mut pool);
        assert_eq!((pool[0].x, pool[0].y), claimed);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_restart_resets_position_and_lives_but_not_max() {
        let mut player = Player::new(GAME_WIDTH, GAME_HEIGHT);
        player.x = 0.0;
        player.lives = 1;
        player.restart(GAME_WIDTH, GAME_HEIGHT);
        assert_eq!(player.x, GAME_WIDTH * 0.5 - PLAYER_WIDTH * 0.5);
        assert_eq!(player.lives, STARTING_LIVES);
        assert_eq!(player.max_lives, MAX_LIVES);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_player_x_stays_in_bounds(
                moves in prop::collection::vec((prop::bool::ANY, prop::bool::ANY), 0..300)
            ) {
                let mut player = Player::new(GAME_WIDTH, GAME_HEIGHT);
                for (left, right) in moves {
                    player.update(&held(left, right), GAME_WIDTH);
                    prop_assert!(player.x >= -player.width * 0.45);
                    prop_assert!(player.x <= GAME_WIDTH - player.width * 0.55);
                }
            }
        }
    }
}
