// Library exports for the binary and the integration tests
pub use entities::{Enemy, EnemyKind, HitBox, Player, Projectile, Wave, WaveOutcome};
pub use game::{Game, GameKey, HeldKeys};

pub mod app;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
