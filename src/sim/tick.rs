//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by exactly one tick. Step order
//! matters: enemy contact is judged from where each enemy stood before it
//! moved, bullet collisions see post-movement positions, and removals during
//! collision resolution walk the collections back to front, so the entity
//! added last wins a tie.

use glam::Vec2;

use super::collision::{
    bullet_hits_enemy, enemy_bullet_hits_player, enemy_touches_player, player_reaches_power_up,
};
use super::phase::enter_game_over;
use super::spawn::{roll_power_up, start_wave};
use super::state::{Bullet, EnemyBullet, EnemyKind, GameEvent, GamePhase, World};
use crate::consts::*;
use crate::direction_to;

/// Held movement directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Movement {
    /// Per-axis step direction (y grows downward). Opposite keys cancel.
    pub fn delta(&self) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.up {
            delta.y -= 1.0;
        }
        if self.down {
            delta.y += 1.0;
        }
        if self.left {
            delta.x -= 1.0;
        }
        if self.right {
            delta.x += 1.0;
        }
        delta
    }

    /// Directions that move along `dir`, ignoring components under `dead_zone`
    pub fn toward(dir: Vec2, dead_zone: f32) -> Self {
        Self {
            up: dir.y < -dead_zone,
            down: dir.y > dead_zone,
            left: dir.x < -dead_zone,
            right: dir.x > dead_zone,
        }
    }
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub movement: Movement,
    /// Continuous fire toward the pointer
    pub fire_held: bool,
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// One-shot fire toward a clicked point
    pub fire_click: Option<Vec2>,
}

/// Advance the world by one fixed tick. No-op unless PLAYING.
pub fn tick(world: &mut World, input: &TickInput) {
    if world.phase != GamePhase::Playing {
        return;
    }

    world.time_ticks += 1;

    move_player(world, input.movement);

    // A click resolves first; the cooldown it sets blocks the held shot
    let click_dir = input
        .fire_click
        .and_then(|target| direction_to(world.player.pos, target));
    if let Some(dir) = click_dir {
        try_shoot(world, dir);
    }
    if input.fire_held {
        if let Some(dir) = direction_to(world.player.pos, input.pointer) {
            try_shoot(world, dir);
        }
    }

    world.player.tick_timers();

    advance_bullets(world);
    let touching = advance_enemies(world);

    if resolve_contact_damage(world, touching) {
        return;
    }
    if resolve_enemy_bullets(world) {
        return;
    }
    resolve_bullet_hits(world);
    collect_power_ups(world);

    if world.enemies_remaining == 0 {
        world.wave += 1;
        start_wave(world);
    }
}

/// Move each axis independently so the player can slide along a wall
fn move_player(world: &mut World, movement: Movement) {
    let size = world.size;
    let player = &mut world.player;
    let r = player.radius;
    let next = player.pos + movement.delta() * player.speed;

    if next.x - r >= 0.0 && next.x + r <= size.x {
        player.pos.x = next.x;
    }
    if next.y - r >= 0.0 && next.y + r <= size.y {
        player.pos.y = next.y;
    }

    // Keep the full radius inside the arena even if we started outside it
    player.pos.x = player.pos.x.min(size.x - r).max(r);
    player.pos.y = player.pos.y.min(size.y - r).max(r);
}

/// Fire along `dir` (unit vector) if the cooldown allows. Returns true if fired.
fn try_shoot(world: &mut World, dir: Vec2) -> bool {
    let player = &mut world.player;
    if player.shoot_timer > 0 {
        return false;
    }

    let vel = dir * BULLET_SPEED;
    world.bullets.push(Bullet::new(player.pos, vel));
    let mut fired = 1;

    if player.spread_ticks > 0 {
        let offset = Vec2::new(SPREAD_OFFSET, 0.0);
        world.bullets.push(Bullet::new(player.pos, vel + offset));
        world.bullets.push(Bullet::new(player.pos, vel - offset));
        fired += 2;
    }

    player.shoot_timer = player.current_cooldown();
    world.events.push(GameEvent::Shot { bullets: fired });
    true
}

fn advance_bullets(world: &mut World) {
    for bullet in &mut world.bullets {
        bullet.pos += bullet.vel;
        bullet.life = bullet.life.saturating_sub(1);
    }
    world.bullets.retain(|b| b.life > 0);
}

/// Pursuit movement and enemy fire. Returns how many enemies were touching
/// the player before they moved; an enemy exactly on the player is skipped.
fn advance_enemies(world: &mut World) -> usize {
    let target = world.player.pos;
    let armed = world.wave >= ELITE_WAVE;
    let mut touching = 0;

    for enemy in &mut world.enemies {
        let Some(dir) = direction_to(enemy.pos, target) else {
            continue;
        };
        if enemy_touches_player(enemy, &world.player) {
            touching += 1;
        }

        let mut vel = dir * enemy.speed;
        if let EnemyKind::Zigzag { phase } = &mut enemy.kind {
            *phase += ZIGZAG_PHASE_STEP;
            // Not renormalized: zigzaggers outrun their nominal speed
            vel += Vec2::new(phase.cos(), phase.sin());
        }
        enemy.pos += vel;

        if !armed {
            continue;
        }
        if let Some(timer) = enemy.shoot_timer.as_mut() {
            *timer = timer.saturating_sub(1);
            if *timer == 0 {
                world
                    .enemy_bullets
                    .push(EnemyBullet::new(enemy.pos, dir * ENEMY_BULLET_SPEED));
                *timer = ENEMY_FIRE_INTERVAL;
                world.events.push(GameEvent::EnemyShot { pos: enemy.pos });
            }
        }
    }
    touching
}

/// Each touching enemy deals contact damage; returns true on death
fn resolve_contact_damage(world: &mut World, touching: usize) -> bool {
    for _ in 0..touching {
        world.player.take_damage(CONTACT_DAMAGE);
        world.events.push(GameEvent::ContactHit);
        if world.player.is_dead() {
            enter_game_over(world);
            return true;
        }
    }
    false
}

/// Move enemy bullets and apply hits; returns true on death
fn resolve_enemy_bullets(world: &mut World) -> bool {
    for bullet in &mut world.enemy_bullets {
        bullet.pos += bullet.vel;
    }

    for i in (0..world.enemy_bullets.len()).rev() {
        if !enemy_bullet_hits_player(&world.enemy_bullets[i], &world.player) {
            continue;
        }
        world.enemy_bullets.remove(i);
        world.player.take_damage(ENEMY_BULLET_DAMAGE);
        world.events.push(GameEvent::BulletHit);
        if world.player.is_dead() {
            enter_game_over(world);
            return true;
        }
    }
    false
}

/// Player bullets vs enemies. One hit per enemy per tick, one enemy per bullet.
fn resolve_bullet_hits(world: &mut World) {
    for i in (0..world.enemies.len()).rev() {
        let Some(j) = (0..world.bullets.len())
            .rev()
            .find(|&j| bullet_hits_enemy(&world.bullets[j], &world.enemies[i]))
        else {
            continue;
        };
        world.bullets.remove(j);

        let enemy = &mut world.enemies[i];
        enemy.hp -= 1;
        let pos = enemy.pos;
        world.events.push(GameEvent::EnemyHit { pos });

        if enemy.hp <= 0 {
            world.enemies.remove(i);
            world.enemies_remaining = world.enemies_remaining.saturating_sub(1);
            world.score += KILL_SCORE;
            world.events.push(GameEvent::EnemyKilled { pos });

            if let Some(power_up) = roll_power_up(&mut world.rng, pos) {
                world.events.push(GameEvent::PowerUpDropped {
                    kind: power_up.kind,
                    pos,
                });
                world.power_ups.push(power_up);
            }
        }
    }
}

fn collect_power_ups(world: &mut World) {
    for i in (0..world.power_ups.len()).rev() {
        if !player_reaches_power_up(&world.player, &world.power_ups[i]) {
            continue;
        }
        let power_up = world.power_ups.remove(i);
        world.player.apply_power_up(power_up.kind);
        log::debug!("Collected {:?}", power_up.kind);
        world.events.push(GameEvent::PowerUpCollected {
            kind: power_up.kind,
        });
    }
}
