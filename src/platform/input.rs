//! Keyboard/pointer capture
//!
//! Browser event handlers feed raw key names and pointer positions in here
//! between frames; the frame loop reads a `TickInput` snapshot per tick.

use glam::Vec2;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{Command, Movement, TickInput};

/// Accumulated input state
#[derive(Debug, Clone)]
pub struct InputState {
    movement: Movement,
    fire_held: bool,
    pointer: Vec2,
    pending_click: Option<Vec2>,
    pending_commands: Vec<Command>,
    demo_mode: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Pointer starts at the arena centre, where the player spawns
    pub fn new() -> Self {
        Self {
            movement: Movement::default(),
            fire_held: false,
            pointer: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT) / 2.0,
            pending_click: None,
            pending_commands: Vec::new(),
            demo_mode: false,
        }
    }

    /// Handle a keydown (`KeyboardEvent.key` value). Returns true if the key is ours.
    pub fn key_down(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => self.movement.up = true,
            "ArrowDown" => self.movement.down = true,
            "ArrowLeft" => self.movement.left = true,
            "ArrowRight" => self.movement.right = true,
            " " => self.fire_held = true,
            "p" | "P" => self.pending_commands.push(Command::Pause),
            "i" | "I" => self.pending_commands.push(Command::Info),
            "r" | "R" => self.pending_commands.push(Command::Restart),
            "d" | "D" => {
                self.demo_mode = !self.demo_mode;
                log::info!("Demo mode: {}", self.demo_mode);
            }
            _ => return false,
        }
        true
    }

    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowUp" => self.movement.up = false,
            "ArrowDown" => self.movement.down = false,
            "ArrowLeft" => self.movement.left = false,
            "ArrowRight" => self.movement.right = false,
            " " => self.fire_held = false,
            _ => {}
        }
    }

    /// Pointer moved (world coordinates)
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Mouse button pressed at `pos` (world coordinates)
    pub fn clicked(&mut self, pos: Vec2) {
        self.pointer = pos;
        self.pending_click = Some(pos);
    }

    /// Release everything held (e.g. window lost focus)
    pub fn release_all(&mut self) {
        self.movement = Movement::default();
        self.fire_held = false;
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Snapshot for the next tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            movement: self.movement,
            fire_held: self.fire_held,
            pointer: self.pointer,
            fire_click: self.pending_click,
        }
    }

    /// Clear one-shot inputs after a tick consumed them
    pub fn clear_one_shots(&mut self) {
        self.pending_click = None;
    }

    /// Drain queued commands in arrival order
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending_commands)
    }
}
