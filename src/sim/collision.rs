//! Circle-vs-circle overlap tests
//!
//! Every entity is a circle, so all collision checks reduce to a distance
//! comparison against the sum of radii.

use glam::Vec2;

use super::state::{Bullet, Enemy, EnemyBullet, Player, PowerUp};

/// True when two circles overlap (strictly closer than the sum of radii)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Enemy body touching the player
pub fn enemy_touches_player(enemy: &Enemy, player: &Player) -> bool {
    circles_overlap(enemy.pos, enemy.radius, player.pos, player.radius)
}

/// Enemy bullet striking the player
pub fn enemy_bullet_hits_player(bullet: &EnemyBullet, player: &Player) -> bool {
    circles_overlap(bullet.pos, bullet.radius, player.pos, player.radius)
}

/// Player bullet striking an enemy
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    circles_overlap(enemy.pos, enemy.radius, bullet.pos, bullet.radius)
}

/// Player close enough to collect a power-up
pub fn player_reaches_power_up(player: &Player, power_up: &PowerUp) -> bool {
    circles_overlap(player.pos, player.radius, power_up.pos, power_up.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{EnemyKind, PowerUpKind};

    fn enemy_at(pos: Vec2) -> Enemy {
        Enemy {
            pos,
            radius: 12.0,
            speed: 1.0,
            hp: 3,
            shoot_timer: None,
            kind: EnemyKind::Normal,
        }
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(19.9, 0.0), 10.0));
        // Exactly touching does not count
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
    }

    #[test]
    fn test_enemy_contact_range() {
        let player = Player::new(Vec2::new(100.0, 100.0));
        // 10 + 12 = 22
        assert!(enemy_touches_player(&enemy_at(Vec2::new(121.0, 100.0)), &player));
        assert!(!enemy_touches_player(&enemy_at(Vec2::new(123.0, 100.0)), &player));
    }

    #[test]
    fn test_bullet_hits_enemy_diagonal() {
        let bullet = Bullet::new(Vec2::new(10.0, 10.0), Vec2::ZERO);
        // distance ~14.1 < 12 + 3
        assert!(bullet_hits_enemy(&bullet, &enemy_at(Vec2::ZERO)));
        let far = Bullet::new(Vec2::new(11.0, 11.0), Vec2::ZERO);
        assert!(!bullet_hits_enemy(&far, &enemy_at(Vec2::ZERO)));
    }

    #[test]
    fn test_enemy_bullet_and_pickup_ranges() {
        let player = Player::new(Vec2::ZERO);
        assert!(enemy_bullet_hits_player(
            &EnemyBullet::new(Vec2::new(13.5, 0.0), Vec2::ZERO),
            &player
        ));
        let power_up = PowerUp {
            pos: Vec2::new(0.0, 18.5),
            radius: 8.0,
            kind: PowerUpKind::Rapid,
        };
        assert!(!player_reaches_power_up(&player, &power_up));

        let near = PowerUp {
            pos: Vec2::new(0.0, 17.5),
            ..power_up
        };
        assert!(player_reaches_power_up(&player, &near));
    }
}
