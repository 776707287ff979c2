//! Demo mode - the AI plays the game
//!
//! Builds a `TickInput` from the current world: hold fire on the nearest
//! enemy, back away when it gets close, otherwise go grab power-ups.

use glam::Vec2;

use super::state::World;
use super::tick::{Movement, TickInput};

/// Enemies closer than this make the autopilot retreat
pub const DANGER_RADIUS: f32 = 80.0;

/// Ignore direction components smaller than this (prevents jitter)
const DEAD_ZONE: f32 = 0.3;

pub fn autopilot_input(world: &World) -> TickInput {
    let player = world.player.pos;
    let mut input = TickInput {
        pointer: player,
        ..Default::default()
    };

    let nearest_enemy = world
        .enemies
        .iter()
        .map(|e| e.pos)
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)));

    if let Some(enemy) = nearest_enemy {
        input.pointer = enemy;
        input.fire_held = true;

        if enemy.distance(player) < DANGER_RADIUS {
            input.movement = Movement::toward(away_from(player, enemy), DEAD_ZONE);
            return input;
        }
    }

    let nearest_power_up = world
        .power_ups
        .iter()
        .map(|p| p.pos)
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)));

    if let Some(target) = nearest_power_up {
        input.movement = Movement::toward((target - player).normalize_or_zero(), DEAD_ZONE);
    }

    input
}

/// Unit vector pointing from `threat` to `pos`
fn away_from(pos: Vec2, threat: Vec2) -> Vec2 {
    (pos - threat).normalize_or_zero()
}
