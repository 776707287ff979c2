//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (speeds are per tick)
//! - Seeded RNG only
//! - Stable iteration order (insertion order, resolved back to front)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod phase;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::circles_overlap;
pub use phase::{Command, apply_command, enter_game_over, restart};
pub use spawn::{enemy_count_for_wave, enemy_speed_for_wave, roll_power_up, spawn_enemy, start_wave};
pub use state::{
    Bullet, Enemy, EnemyBullet, EnemyKind, GameEvent, GamePhase, Player, PowerUp, PowerUpKind,
    World,
};
pub use tick::{Movement, TickInput, tick};
