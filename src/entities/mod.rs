mod enemy;
mod player;
mod projectile;
mod wave;

// Re-export all public types
pub use enemy::{Enemy, EnemyKind};
pub use player::Player;
pub use projectile::Projectile;
pub use wave::{Wave, WaveOutcome};

/// Axis-aligned bounding box in logical game coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitBox {
    /// Strict-inequality overlap test: boxes that merely touch along an
    /// edge do not count as colliding.
    pub fn overlaps(&self, other: &HitBox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
