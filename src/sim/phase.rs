//! Game phase transitions
//!
//! PLAYING <-> PAUSED, PLAYING <-> INFO, PLAYING -> GAME_OVER -> (restart) PLAYING.
//! Anything else is ignored.

use super::spawn::start_wave;
use super::state::{GameEvent, GamePhase, Player, World};

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    Info,
    Restart,
}

/// Apply a command. Returns the new phase if it changed.
pub fn apply_command(world: &mut World, command: Command) -> Option<GamePhase> {
    let next = match (command, world.phase) {
        (Command::Pause, GamePhase::Playing) => GamePhase::Paused,
        (Command::Pause, GamePhase::Paused) => GamePhase::Playing,
        (Command::Info, GamePhase::Playing) => GamePhase::Info,
        (Command::Info, GamePhase::Info) => GamePhase::Playing,
        (Command::Restart, GamePhase::GameOver) => {
            restart(world);
            return Some(world.phase);
        }
        _ => return None,
    };

    log::debug!("{:?}: {:?} -> {:?}", command, world.phase, next);
    world.phase = next;
    Some(next)
}

/// Enter GAME_OVER. Idempotent: only the first call emits the event.
pub fn enter_game_over(world: &mut World) {
    if world.phase == GamePhase::GameOver {
        return;
    }
    world.phase = GamePhase::GameOver;
    log::info!("Game over: score {} on wave {}", world.score, world.wave);
    world.events.push(GameEvent::GameOver {
        score: world.score,
        wave: world.wave,
    });
}

/// Reset the run and start wave 1
pub fn restart(world: &mut World) {
    world.phase = GamePhase::Playing;
    world.wave = 1;
    world.score = 0;
    world.player = Player::new(world.center());
    world.bullets.clear();
    world.enemy_bullets.clear();
    world.power_ups.clear();
    log::info!("Restarting run");
    start_wave(world);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, EnemyBullet, PowerUp, PowerUpKind};
    use glam::Vec2;

    #[test]
    fn test_pause_toggles() {
        let mut world = World::new(1);
        assert_eq!(apply_command(&mut world, Command::Pause), Some(GamePhase::Paused));
        assert_eq!(apply_command(&mut world, Command::Pause), Some(GamePhase::Playing));
    }

    #[test]
    fn test_info_toggles() {
        let mut world = World::new(1);
        assert_eq!(apply_command(&mut world, Command::Info), Some(GamePhase::Info));
        assert_eq!(apply_command(&mut world, Command::Info), Some(GamePhase::Playing));
    }

    #[test]
    fn test_pause_and_info_do_not_cross() {
        let mut world = World::new(1);
        apply_command(&mut world, Command::Pause);
        assert_eq!(apply_command(&mut world, Command::Info), None);
        assert_eq!(world.phase, GamePhase::Paused);

        apply_command(&mut world, Command::Pause);
        apply_command(&mut world, Command::Info);
        assert_eq!(apply_command(&mut world, Command::Pause), None);
        assert_eq!(world.phase, GamePhase::Info);
    }

    #[test]
    fn test_restart_only_from_game_over() {
        let mut world = World::new(1);
        world.score = 500;
        assert_eq!(apply_command(&mut world, Command::Restart), None);
        assert_eq!(world.score, 500);
    }

    #[test]
    fn test_game_over_ignores_toggles() {
        let mut world = World::new(1);
        enter_game_over(&mut world);
        assert_eq!(apply_command(&mut world, Command::Pause), None);
        assert_eq!(apply_command(&mut world, Command::Info), None);
        assert_eq!(world.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_emits_once() {
        let mut world = World::new(1);
        world.drain_events();
        world.score = 300;
        enter_game_over(&mut world);
        enter_game_over(&mut world);
        let events = world.drain_events();
        assert_eq!(events, vec![GameEvent::GameOver { score: 300, wave: 1 }]);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut world = World::new(9);
        world.wave = 7;
        world.score = 2300;
        world.player.hp = 0.0;
        world.player.pos = Vec2::new(15.0, 15.0);
        world.player.rapid_ticks = 40;
        world.player.spread_ticks = 40;
        world.player.shoot_timer = 3;
        world.bullets.push(Bullet::new(Vec2::ZERO, Vec2::X));
        world.enemy_bullets.push(EnemyBullet::new(Vec2::ZERO, Vec2::X));
        world.power_ups.push(PowerUp {
            pos: Vec2::ZERO,
            radius: 8.0,
            kind: PowerUpKind::Spread,
        });
        enter_game_over(&mut world);

        assert_eq!(apply_command(&mut world, Command::Restart), Some(GamePhase::Playing));
        assert_eq!(world.wave, 1);
        assert_eq!(world.score, 0);
        assert_eq!(world.player.hp, world.player.max_hp);
        assert_eq!(world.player.pos, world.center());
        assert_eq!(world.player.rapid_ticks, 0);
        assert_eq!(world.player.spread_ticks, 0);
        assert_eq!(world.player.shoot_timer, 0);
        assert!(world.bullets.is_empty());
        assert!(world.enemy_bullets.is_empty());
        assert!(world.power_ups.is_empty());
        assert_eq!(world.enemies.len(), 2);
        assert_eq!(world.enemies_remaining, 2);
    }
}
