use rand::Rng;

use super::wave::WaveOutcome;
use super::{HitBox, Player, Projectile};

/// The closed set of enemy variants. Only concrete kinds exist; there is
/// no constructible "base" enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Beetlemorph,
}

impl EnemyKind {
    /// Starting health, which doubles as the score value on destruction.
    fn starting_lives(self) -> i32 {
        match self {
            EnemyKind::Beetlemorph => 1,
        }
    }

    /// Last frame of the death animation.
    pub fn max_frame(self) -> u32 {
        match self {
            EnemyKind::Beetlemorph => 2,
        }
    }

    /// Number of art variants the renderer can pick from.
    pub fn art_rows(self) -> u32 {
        match self {
            EnemyKind::Beetlemorph => 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Offset from the owning wave's anchor.
    pub relative_x: f32,
    pub relative_y: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub lives: i32,
    /// Starting health; credited to the score when the death animation
    /// completes.
    pub max_lives: i32,
    /// Death-animation column. 0 while alive.
    pub frame_x: u32,
    /// Art variant row, fixed at spawn.
    pub frame_y: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, relative_x: f32, relative_y: f32, size: f32) -> Self {
        let lives = kind.starting_lives();
        Self {
            kind,
            relative_x,
            relative_y,
            x: 0.0,
            y: 0.0,
            width: size,
            height: size,
            lives,
            max_lives: lives,
            frame_x: 0,
            frame_y: rand::rng().random_range(0..kind.art_rows()),
            marked_for_deletion: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lives >= 1
    }

    pub fn hit(&mut self, damage: i32) {
        self.lives -= damage;
    }

    /// One simulation tick: reposition against the wave anchor, resolve
    /// projectile and player collisions, and advance the death animation
    /// on sprite ticks. Points and bottom-edge breaches are accumulated
    /// into `outcome`; the game decides what they mean.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        wave_x: f32,
        wave_y: f32,
        pool: &mut [Projectile],
        player: &mut Player,
        sprite_tick: bool,
        game_height: f32,
        outcome: &mut WaveOutcome,
    ) {
        self.x = wave_x + self.relative_x;
        self.y = wave_y + self.relative_y;

        // Active projectiles always burn on contact, lethal or not.
        for projectile in pool.iter_mut().filter(|p| !p.free) {
            if self.hit_box().overlaps(&projectile.hit_box()) {
                self.hit(1);
                projectile.reset();
            }
        }

        if self.lives < 1 {
            if sprite_tick {
                self.frame_x += 1;
            }
            if self.frame_x > self.kind.max_frame() {
                self.marked_for_deletion = true;
                outcome.points += self.max_lives as u32;
            }
        }

        // Ramming the player skips the death animation entirely: no score,
        // one player life.
        if self.is_alive() && self.hit_box().overlaps(&player.hit_box()) {
            self.lives = 0;
            self.marked_for_deletion = true;
            player.lives = player.lives.saturating_sub(1);
        }

        if self.y + self.height > game_height {
            self.marked_for_deletion = true;
            outcome.breached = true;
        }
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
