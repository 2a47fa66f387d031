use rand::Rng;

use super::{Enemy, EnemyKind, Player, Projectile};

/// Descent rate while a freshly spawned wave eases in from above the
/// screen.
pub const ENTRY_SPEED: f32 = 5.0;
/// Vertical speed applied between an edge bounce and the next descent
/// target.
pub const DESCENT_SPEED: f32 = 3.0;

/// What a wave pass produced: points from completed death animations and
/// whether any enemy crossed the bottom edge. The game, not the wave,
/// decides how to apply both.
#[derive(Debug, Default)]
pub struct WaveOutcome {
    pub points: u32,
    pub breached: bool,
}

/// A rigid grid of enemies sharing one anchor and velocity.
#[derive(Debug, Clone)]
pub struct Wave {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    /// Accumulating descent target; raised one enemy-size per bounce.
    pub next_y: f32,
    pub enemy_size: f32,
    pub enemies: Vec<Enemy>,
    pub next_wave_triggered: bool,
}

impl Wave {
    pub fn new(columns: u32, rows: u32, enemy_size: f32, game_width: f32) -> Self {
        let width = columns as f32 * enemy_size;
        let height = rows as f32 * enemy_size;

        let mut enemies = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for col in 0..columns {
                enemies.push(Enemy::new(
                    EnemyKind::Beetlemorph,
                    col as f32 * enemy_size,
                    row as f32 * enemy_size,
                    enemy_size,
                ));
            }
        }

        Self {
            x: game_width * 0.5 - enemy_size,
            y: -height,
            width,
            height,
            speed_x: if rand::rng().random_bool(0.5) { -1.0 } else { 1.0 },
            speed_y: 0.0,
            next_y: 0.0,
            enemy_size,
            enemies,
            next_wave_triggered: false,
        }
    }

    /// Moves the grid as one body, fans the tick out to every enemy, and
    /// drops the ones marked for deletion.
    pub fn update(
        &mut self,
        game_width: f32,
        game_height: f32,
        sprite_tick: bool,
        pool: &mut [Projectile],
        player: &mut Player,
    ) -> WaveOutcome {
        if self.y < 0.0 {
            self.y += ENTRY_SPEED;
        }
        if self.y >= self.next_y && self.speed_y != 0.0 {
            self.speed_y = 0.0;
        }
        if self.x < 0.0 || self.x > game_width - self.width {
            self.speed_x = -self.speed_x;
            self.speed_y = DESCENT_SPEED;
            self.next_y += self.enemy_size;
        }
        self.x += self.speed_x;
        self.y += self.speed_y;

        let mut outcome = WaveOutcome::default();
        for enemy in &mut self.enemies {
            enemy.update(
                self.x,
                self.y,
                pool,
                player,
                sprite_tick,
                game_height,
                &mut outcome,
            );
        }
        self.enemies.retain(|enemy| !enemy.marked_for_deletion);

        outcome
    }

    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }
}
