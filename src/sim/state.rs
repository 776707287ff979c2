//! Game state and core simulation types
//!
//! Entities are plain records; all behaviour lives in `tick`, `spawn` and `phase`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// How-to-play screen is open
    Info,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Movement per tick along each held axis
    pub speed: f32,
    pub max_hp: f32,
    /// Always within [0, max_hp]
    pub hp: f32,
    /// Base ticks between shots
    pub shoot_cooldown: u32,
    /// Ticks until the next shot is allowed
    pub shoot_timer: u32,
    /// Rapid fire ticks remaining
    pub rapid_ticks: u32,
    /// Spread shot ticks remaining
    pub spread_ticks: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            max_hp: PLAYER_MAX_HP,
            hp: PLAYER_MAX_HP,
            shoot_cooldown: SHOOT_COOLDOWN,
            shoot_timer: 0,
            rapid_ticks: 0,
            spread_ticks: 0,
        }
    }

    /// Cooldown applied after a shot (shorter while rapid fire is active)
    pub fn current_cooldown(&self) -> u32 {
        if self.rapid_ticks > 0 {
            RAPID_COOLDOWN
        } else {
            self.shoot_cooldown
        }
    }

    /// Count down shot and power-up timers
    pub fn tick_timers(&mut self) {
        self.shoot_timer = self.shoot_timer.saturating_sub(1);
        self.rapid_ticks = self.rapid_ticks.saturating_sub(1);
        self.spread_ticks = self.spread_ticks.saturating_sub(1);
    }

    /// Apply damage, clamping HP at zero
    pub fn take_damage(&mut self, amount: f32) {
        self.hp = (self.hp - amount).clamp(0.0, self.max_hp);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Apply a collected power-up
    pub fn apply_power_up(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Heal => self.hp = (self.hp + HEAL_AMOUNT).min(self.max_hp),
            PowerUpKind::Rapid => self.rapid_ticks = BUFF_DURATION,
            PowerUpKind::Spread => self.spread_ticks = BUFF_DURATION,
        }
    }

    /// HP as a fraction of max (for the HUD bar)
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp > 0.0 {
            self.hp / self.max_hp
        } else {
            0.0
        }
    }
}

/// A player-owned bullet
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Ticks until the bullet expires
    pub life: u32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BULLET_RADIUS,
            life: BULLET_LIFETIME,
        }
    }
}

/// An enemy bullet. Lives until it hits the player or the wave ends.
#[derive(Debug, Clone)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl EnemyBullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: ENEMY_BULLET_RADIUS,
        }
    }
}

/// Enemy movement variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyKind {
    /// Direct pursuit
    Normal,
    /// Pursuit plus an oscillating lateral offset
    Zigzag { phase: f32 },
}

/// An enemy entity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub hp: i32,
    /// Ticks until next shot; `None` for enemies that never fire
    pub shoot_timer: Option<u32>,
    pub kind: EnemyKind,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Heal,
    Rapid,
    Spread,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Heal, PowerUpKind::Rapid, PowerUpKind::Spread];
}

/// A power-up pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerUpKind,
}

/// Things that happened during a tick, consumed by presentation
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Player fired (1 or 3 bullets)
    Shot { bullets: usize },
    /// An enemy fired at the player
    EnemyShot { pos: Vec2 },
    /// Player touched an enemy
    ContactHit,
    /// Player was hit by an enemy bullet
    BulletHit,
    /// A player bullet struck an enemy
    EnemyHit { pos: Vec2 },
    /// An enemy was destroyed
    EnemyKilled { pos: Vec2 },
    PowerUpDropped { kind: PowerUpKind, pos: Vec2 },
    PowerUpCollected { kind: PowerUpKind },
    WaveStarted { wave: u32, enemies: u32 },
    GameOver { score: u64, wave: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn/drop RNG
    pub rng: Pcg32,
    /// Arena size (top-left origin, y down)
    pub size: Vec2,
    /// Current wave (1-based)
    pub wave: u32,
    /// Enemies still alive in the current wave
    pub enemies_remaining: u32,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl World {
    /// Create a world of the default size with wave 1 already spawned
    pub fn new(seed: u64) -> Self {
        Self::with_size(seed, Vec2::new(WORLD_WIDTH, WORLD_HEIGHT))
    }

    pub fn with_size(seed: u64, size: Vec2) -> Self {
        let mut world = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            size,
            wave: 1,
            enemies_remaining: 0,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            player: Player::new(size / 2.0),
            bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            events: Vec::new(),
        };

        super::spawn::start_wave(&mut world);

        world
    }

    /// Centre of the arena (player spawn point)
    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_starts_wave_one() {
        let world = World::new(7);
        assert_eq!(world.wave, 1);
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.enemies.len(), 2);
        assert_eq!(world.enemies_remaining, 2);
        assert_eq!(world.player.pos, Vec2::new(400.0, 300.0));
        assert!(matches!(
            world.events.as_slice(),
            [GameEvent::WaveStarted { wave: 1, enemies: 2 }]
        ));
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut player = Player::new(Vec2::ZERO);
        player.take_damage(250.0);
        assert_eq!(player.hp, 0.0);
        assert!(player.is_dead());
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut player = Player::new(Vec2::ZERO);
        player.hp = 90.0;
        player.apply_power_up(PowerUpKind::Heal);
        assert_eq!(player.hp, PLAYER_MAX_HP);

        player.hp = 50.0;
        player.apply_power_up(PowerUpKind::Heal);
        assert_eq!(player.hp, 75.0);
    }

    #[test]
    fn test_buffs_set_duration() {
        let mut player = Player::new(Vec2::ZERO);
        player.rapid_ticks = 12;
        player.apply_power_up(PowerUpKind::Rapid);
        player.apply_power_up(PowerUpKind::Spread);
        assert_eq!(player.rapid_ticks, BUFF_DURATION);
        assert_eq!(player.spread_ticks, BUFF_DURATION);
    }

    #[test]
    fn test_timers_do_not_underflow() {
        let mut player = Player::new(Vec2::ZERO);
        player.shoot_timer = 1;
        player.tick_timers();
        player.tick_timers();
        assert_eq!(player.shoot_timer, 0);
        assert_eq!(player.rapid_ticks, 0);
        assert_eq!(player.spread_ticks, 0);
    }

    #[test]
    fn test_rapid_fire_shortens_cooldown() {
        let mut player = Player::new(Vec2::ZERO);
        assert_eq!(player.current_cooldown(), SHOOT_COOLDOWN);
        player.rapid_ticks = 1;
        assert_eq!(player.current_cooldown(), RAPID_COOLDOWN);
    }
}
