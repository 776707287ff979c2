//! Wave composition and spawning
//!
//! Decides how many enemies a wave has, where they enter, what kind they are,
//! and whether a destroyed enemy drops a power-up.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameEvent, PowerUp, PowerUpKind, World};
use crate::consts::*;

/// Number of enemies in a wave
pub fn enemy_count_for_wave(wave: u32) -> u32 {
    BASE_ENEMY_COUNT + wave / 2
}

/// Enemy speed (units/tick) for a wave
pub fn enemy_speed_for_wave(wave: u32) -> f32 {
    ENEMY_BASE_SPEED + wave as f32 * ENEMY_SPEED_PER_WAVE
}

/// Populate `world.wave`: clears enemies and enemy bullets, spawns a fresh cohort.
///
/// Player bullets and power-ups are left in flight.
pub fn start_wave(world: &mut World) {
    world.enemies.clear();
    world.enemy_bullets.clear();

    let count = enemy_count_for_wave(world.wave);
    for _ in 0..count {
        let enemy = spawn_enemy(&mut world.rng, world.wave, world.size);
        world.enemies.push(enemy);
    }
    world.enemies_remaining = count;

    log::info!("Wave {}: {} enemies", world.wave, count);
    world.events.push(GameEvent::WaveStarted {
        wave: world.wave,
        enemies: count,
    });
}

/// Create one enemy on a random arena edge
pub fn spawn_enemy<R: Rng + ?Sized>(rng: &mut R, wave: u32, size: Vec2) -> Enemy {
    let pos = edge_position(rng, size);

    let elite = wave >= ELITE_WAVE;
    let kind = if elite && rng.random::<f32>() >= 0.5 {
        EnemyKind::Zigzag { phase: 0.0 }
    } else {
        EnemyKind::Normal
    };

    Enemy {
        pos,
        radius: ENEMY_RADIUS,
        speed: enemy_speed_for_wave(wave),
        hp: ENEMY_HP,
        shoot_timer: elite.then_some(ENEMY_FIRE_INTERVAL),
        kind,
    }
}

/// Uniform edge, then uniform position along it
fn edge_position<R: Rng + ?Sized>(rng: &mut R, size: Vec2) -> Vec2 {
    match rng.random_range(0..4) {
        0 => Vec2::new(0.0, rng.random::<f32>() * size.y),
        1 => Vec2::new(size.x, rng.random::<f32>() * size.y),
        2 => Vec2::new(rng.random::<f32>() * size.x, 0.0),
        _ => Vec2::new(rng.random::<f32>() * size.x, size.y),
    }
}

/// Roll for a power-up drop at a destroyed enemy's position
pub fn roll_power_up<R: Rng + ?Sized>(rng: &mut R, pos: Vec2) -> Option<PowerUp> {
    if rng.random::<f32>() >= POWERUP_DROP_CHANCE {
        return None;
    }
    let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
    Some(PowerUp {
        pos,
        radius: POWERUP_RADIUS,
        kind,
    })
}
