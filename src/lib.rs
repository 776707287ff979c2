//! Neon Barrage - A neon arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, waves, game phase)
//! - `engine`: Owns the world and score board, turns events into cues/overlays
//! - `renderer`: Draw commands and the Canvas2D backend
//! - `platform`: Browser input capture and frame clock
//! - `persistence`: Key-value storage (LocalStorage on web)

pub mod audio;
pub mod engine;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use engine::{Engine, FrameOutput, OverlayUpdate};
pub use highscores::ScoreBoard;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Distances are world units, speeds are units per tick, durations are ticks.
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Arena dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_MAX_HP: f32 = 100.0;
    /// Ticks between shots without rapid fire
    pub const SHOOT_COOLDOWN: u32 = 15;
    /// Ticks between shots while rapid fire is active
    pub const RAPID_COOLDOWN: u32 = 5;

    /// Player bullets
    pub const BULLET_SPEED: f32 = 6.0;
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_LIFETIME: u32 = 90;
    /// Added to the x velocity of the side bullets of a spread shot
    pub const SPREAD_OFFSET: f32 = 2.0;

    /// Enemies
    pub const ENEMY_RADIUS: f32 = 12.0;
    pub const ENEMY_HP: i32 = 3;
    pub const ENEMY_BASE_SPEED: f32 = 0.7;
    pub const ENEMY_SPEED_PER_WAVE: f32 = 0.06;
    /// First wave with zigzag enemies and enemy fire
    pub const ELITE_WAVE: u32 = 5;
    pub const ENEMY_FIRE_INTERVAL: u32 = 140;
    pub const ENEMY_BULLET_SPEED: f32 = 2.5;
    pub const ENEMY_BULLET_RADIUS: f32 = 4.0;
    /// Zigzag phase advance (radians per tick)
    pub const ZIGZAG_PHASE_STEP: f32 = 0.1;
    /// Enemies per wave = BASE_ENEMY_COUNT + wave / 2
    pub const BASE_ENEMY_COUNT: u32 = 2;

    /// Damage
    pub const CONTACT_DAMAGE: f32 = 0.4;
    pub const ENEMY_BULLET_DAMAGE: f32 = 10.0;

    /// Score per enemy destroyed
    pub const KILL_SCORE: u64 = 100;

    /// Power-ups
    pub const POWERUP_RADIUS: f32 = 8.0;
    pub const POWERUP_DROP_CHANCE: f32 = 0.25;
    pub const HEAL_AMOUNT: f32 = 25.0;
    /// Rapid/spread duration (10 seconds at 60 Hz)
    pub const BUFF_DURATION: u32 = 600;
}

/// Unit vector from `from` toward `to`, `None` when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let dist = delta.length();
    if dist == 0.0 { None } else { Some(delta / dist) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_to_normalizes() {
        let dir = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < 1e-6);
        assert!((dir.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_direction_to_zero_length() {
        assert!(direction_to(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)).is_none());
    }
}
