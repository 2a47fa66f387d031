use std::time::Duration;

use rand::Rng;

use crate::entities::{Player, Projectile, Wave};

/// Logical playfield dimensions. The renderer projects these onto
/// whatever terminal area is available.
pub const GAME_WIDTH: f32 = 600.0;
pub const GAME_HEIGHT: f32 = 800.0;

/// Fixed simulation timestep; the app only ticks the game once this much
/// real time has accumulated.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(25);

pub const PROJECTILE_POOL_SIZE: usize = 10;
/// Milliseconds between death-animation frame advances.
pub const SPRITE_INTERVAL_MS: f32 = 120.0;

const STARTING_COLUMNS: u32 = 3;
const STARTING_ROWS: u32 = 3;
const ENEMY_SIZE: f32 = 80.0;

/// Keys the game reacts to. Everything else the terminal reports is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Fire,
    Restart,
}

/// Movement keys currently held down. Both directions may be held at
/// once; the player applies both.
#[derive(Debug, Default, Clone)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Aggregate root: owns the player, the projectile pool, the wave list,
/// and all score/lives/game-over state. `update` is the single per-frame
/// entry point; key transitions arrive through `key_pressed` /
/// `key_released`.
pub struct Game {
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub waves: Vec<Wave>,
    pub held: HeldKeys,
    /// Set while the fire key is down; blocks auto-repeat from
    /// double-firing.
    pub fired: bool,
    pub score: u32,
    pub wave_count: u32,
    pub is_game_over: bool,
    pub columns: u32,
    pub rows: u32,
    pub enemy_size: f32,
    sprite_timer: f32,
    sprite_tick: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            player: Player::new(GAME_WIDTH, GAME_HEIGHT),
            projectiles: (0..PROJECTILE_POOL_SIZE)
                .map(|_| Projectile::new())
                .collect(),
            waves: vec![Wave::new(
                STARTING_COLUMNS,
                STARTING_ROWS,
                ENEMY_SIZE,
                GAME_WIDTH,
            )],
            held: HeldKeys::default(),
            fired: false,
            score: 0,
            wave_count: 1,
            is_game_over: false,
            columns: STARTING_COLUMNS,
            rows: STARTING_ROWS,
            enemy_size: ENEMY_SIZE,
            sprite_timer: 0.0,
            sprite_tick: false,
        }
    }

    pub fn key_pressed(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.held.left = true,
            GameKey::Right => self.held.right = true,
            GameKey::Fire => {
                if !self.fired {
                    self.player.shoot(&mut self.projectiles);
                }
                self.fired = true;
            }
            GameKey::Restart => {
                if self.is_game_over {
                    self.restart();
                }
            }
        }
    }

    pub fn key_released(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.held.left = false,
            GameKey::Right => self.held.right = false,
            GameKey::Fire => self.fired = false,
            GameKey::Restart => {}
        }
    }

    /// One fixed-timestep frame, in a fixed order: sprite timer, pool,
    /// player, waves (movement, collisions, filtering), scoring,
    /// wave-clear spawning, terminal condition.
    pub fn update(&mut self, dt_ms: f32) {
        self.update_sprite_timer(dt_ms);

        for projectile in &mut self.projectiles {
            projectile.update();
        }

        self.player.update(&self.held, GAME_WIDTH);

        let mut points = 0;
        let mut breached = false;
        for wave in &mut self.waves {
            let outcome = wave.update(
                GAME_WIDTH,
                GAME_HEIGHT,
                self.sprite_tick,
                &mut self.projectiles,
                &mut self.player,
            );
            points += outcome.points;
            breached |= outcome.breached;
        }
        if !self.is_game_over {
            self.score += points;
        }

        // Terminal condition is evaluated here, once per pass, rather
        // than inside individual enemy updates. It must precede the
        // wave-clear check: a breach that empties a wave spawns nothing.
        if breached || self.player.lives == 0 {
            self.is_game_over = true;
        }

        // Each cleared wave spawns its successor exactly once.
        let mut spawns = 0;
        if !self.is_game_over {
            for wave in &mut self.waves {
                if wave.is_cleared() && !wave.next_wave_triggered {
                    wave.next_wave_triggered = true;
                    spawns += 1;
                }
            }
        }
        for _ in 0..spawns {
            self.next_wave();
            self.wave_count += 1;
            if self.player.lives < self.player.max_lives {
                self.player.lives += 1;
            }
        }
    }

    /// Grows the grid (columns first, capped against the playfield) and
    /// pushes the next wave. The wave list itself only grows within a
    /// session.
    fn next_wave(&mut self) {
        let mut rng = rand::rng();
        if rng.random_bool(0.6) && (self.columns as f32) * self.enemy_size < GAME_WIDTH * 0.8 {
            self.columns += 1;
        } else if (self.rows as f32) * self.enemy_size < GAME_HEIGHT * 0.6 {
            self.rows += 1;
        }
        self.waves
            .push(Wave::new(self.columns, self.rows, self.enemy_size, GAME_WIDTH));
    }

    pub fn restart(&mut self) {
        self.player.restart(GAME_WIDTH, GAME_HEIGHT);
        self.columns = STARTING_COLUMNS;
        self.rows = STARTING_ROWS;

        self.waves = vec![Wave::new(
            STARTING_COLUMNS,
            STARTING_ROWS,
            ENEMY_SIZE,
            GAME_WIDTH,
        )];
        self.wave_count = 1;

        self.score = 0;
        self.is_game_over = false;
    }

    fn update_sprite_timer(&mut self, dt_ms: f32) {
        if self.sprite_timer > SPRITE_INTERVAL_MS {
            self.sprite_tick = true;
            self.sprite_timer = 0.0;
        } else {
            self.sprite_tick = false;
            self.sprite_timer += dt_ms;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(game: &Game) -> usize {
        game.projectiles.iter().filter(|p| !p.free).count()
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new();
        assert_eq!(game.projectiles.len(), PROJECTILE_POOL_SIZE);
        assert!(game.projectiles.iter().all(|p| p.free));
        assert_eq!(game.waves.len(), 1);
        assert_eq!(game.waves[0].enemies.len(), 9);
        assert_eq!(game.score, 0);
        assert_eq!(game.wave_count, 1);
        assert!(!game.is_game_over);
    }

    #[test]
    fn test_fire_latch_blocks_repeat_presses() {
        let mut game = Game::new();

        game.key_pressed(GameKey::Fire);
        assert_eq!(active_count(&game), 1);

        // auto-repeat: further presses without a release do nothing
        game.key_pressed(GameKey::Fire);
        game.key_pressed(GameKey::Fire);
        assert_eq!(active_count(&game), 1);

        game.key_released(GameKey::Fire);
        game.key_pressed(GameKey::Fire);
        assert_eq!(active_count(&game), 2);
    }

    #[test]
    fn test_shot_spawns_at_player_top_center() {
        let mut game = Game::new();
        game.key_pressed(GameKey::Fire);
        let projectile = game.projectiles.iter().find(|p| !p.free).unwrap();
        assert_eq!(
            projectile.x + projectile.width * 0.5,
            game.player.x + game.player.width * 0.5
        );
        assert_eq!(projectile.y, game.player.y);
    }

    #[test]
    fn test_pool_never_grows_under_fire() {
        let mut game = Game::new();
        for _ in 0..PROJECTILE_POOL_SIZE + 5 {
            game.key_pressed(GameKey::Fire);
            game.key_released(GameKey::Fire);
        }
        assert_eq!(game.projectiles.len(), PROJECTILE_POOL_SIZE);
        assert_eq!(active_count(&game), PROJECTILE_POOL_SIZE);
    }

    #[test]
    fn test_held_keys_follow_press_and_release() {
        let mut game = Game::new();
        game.key_pressed(GameKey::Left);
        game.key_pressed(GameKey::Right);
        assert!(game.held.left && game.held.right);
        game.key_released(GameKey::Left);
        assert!(!game.held.left && game.held.right);
    }

    #[test]
    fn test_restart_key_ignored_while_playing() {
        let mut game = Game::new();
        game.score = 42;
        game.key_pressed(GameKey::Restart);
        assert_eq!(game.score, 42);
    }

    #[test]
    fn test_sprite_timer_ticks_at_interval() {
        let mut game = Game::new();
        // first update only accumulates
        game.update_sprite_timer(SPRITE_INTERVAL_MS + 1.0);
        assert!(!game.sprite_tick);
        // accumulated time past the interval flips the flag for one frame
        game.update_sprite_timer(0.0);
        assert!(game.sprite_tick);
        game.update_sprite_timer(0.0);
        assert!(!game.sprite_tick);
    }
}
