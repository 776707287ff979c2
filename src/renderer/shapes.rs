//! Shape generation for 2D primitives
//!
//! Turns the world into a flat list of draw commands. Back to front:
//! background, player, bullets, enemy bullets, enemies, power-ups.

use glam::Vec2;

use crate::sim::{EnemyKind, PowerUpKind, World};

/// RGBA color (alpha 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string for Canvas2D fill styles
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const CYAN: Color = Color::rgb(0, 255, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const ORANGE: Color = Color::rgb(255, 165, 0);
pub const LIME: Color = Color::rgb(0, 255, 0);
pub const DEEP_SKY_BLUE: Color = Color::rgb(0, 191, 255);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);

/// Background alpha when motion trails are on (old frames fade out)
pub const TRAIL_FADE_ALPHA: f32 = 0.35;

/// A single draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas
    Clear { color: Color },
    /// Filled circle
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
}

pub fn enemy_color(kind: &EnemyKind) -> Color {
    match kind {
        EnemyKind::Normal => RED,
        EnemyKind::Zigzag { .. } => ORANGE,
    }
}

pub fn power_up_color(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::Heal => LIME,
        PowerUpKind::Rapid => DEEP_SKY_BLUE,
        PowerUpKind::Spread => MAGENTA,
    }
}

/// Build the draw list for one frame
pub fn build_frame(world: &World, motion_trails: bool) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(
        2 + world.bullets.len()
            + world.enemy_bullets.len()
            + world.enemies.len()
            + world.power_ups.len(),
    );

    let background = if motion_trails {
        BLACK.with_alpha(TRAIL_FADE_ALPHA)
    } else {
        BLACK
    };
    commands.push(DrawCommand::Clear { color: background });

    let circle = |center: Vec2, radius: f32, color: Color| DrawCommand::Circle {
        center,
        radius,
        color,
    };

    commands.push(circle(world.player.pos, world.player.radius, CYAN));
    commands.extend(world.bullets.iter().map(|b| circle(b.pos, b.radius, YELLOW)));
    commands.extend(world.enemy_bullets.iter().map(|b| circle(b.pos, b.radius, RED)));
    commands.extend(
        world
            .enemies
            .iter()
            .map(|e| circle(e.pos, e.radius, enemy_color(&e.kind))),
    );
    commands.extend(
        world
            .power_ups
            .iter()
            .map(|p| circle(p.pos, p.radius, power_up_color(p.kind))),
    );

    commands
}
