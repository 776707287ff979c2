//! Simulation engine
//!
//! Owns the world, the score board and its store. Each step runs one tick and
//! turns the resulting events into audio cues and overlay changes; the caller
//! only has to play, draw and display them.

use crate::audio::AudioCue;
use crate::highscores::ScoreBoard;
use crate::persistence::KeyValueStore;
use crate::sim::{Command, GameEvent, GamePhase, TickInput, World, apply_command, tick};
use crate::ui::{Hud, Overlay};

/// Change to the overlay box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayUpdate {
    Show(Overlay),
    Hide,
}

/// Presentation intents produced by one tick
#[derive(Debug, Default)]
pub struct FrameOutput {
    pub cues: Vec<AudioCue>,
    pub overlay: Option<OverlayUpdate>,
    pub events: Vec<GameEvent>,
}

pub struct Engine<S: KeyValueStore> {
    world: World,
    scores: ScoreBoard,
    store: S,
}

impl<S: KeyValueStore> Engine<S> {
    /// New run with wave 1 spawned and high scores loaded from `store`
    pub fn new(seed: u64, store: S) -> Self {
        Self::with_world(World::new(seed), store)
    }

    pub fn with_world(world: World, store: S) -> Self {
        let scores = ScoreBoard::load(&store);
        Self {
            world,
            scores,
            store,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn hud(&self) -> Hud {
        Hud::from_world(&self.world)
    }

    /// Run one tick
    pub fn step(&mut self, input: &TickInput) -> FrameOutput {
        tick(&mut self.world, input);

        let mut output = FrameOutput::default();
        for event in self.world.drain_events() {
            if let Some(cue) = AudioCue::for_event(&event) {
                output.cues.push(cue);
            }
            if let GameEvent::GameOver { score, .. } = event {
                let high_scores = self.scores.record(score, &mut self.store);
                output.overlay = Some(OverlayUpdate::Show(Overlay::game_over(score, high_scores)));
            }
            output.events.push(event);
        }
        output
    }

    /// Apply a pause/info/restart command. Ignored commands return `None`.
    pub fn command(&mut self, command: Command) -> Option<OverlayUpdate> {
        let phase = apply_command(&mut self.world, command)?;
        Some(match Overlay::for_phase(phase) {
            Some(overlay) => OverlayUpdate::Show(overlay),
            None => OverlayUpdate::Hide,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::{EnemyBullet, Movement};
    use glam::Vec2;

    /// Engine whose player dies on the next tick
    fn doomed_engine(store: MemoryStore) -> Engine<MemoryStore> {
        let mut world = World::new(21);
        world.score = 400;
        world.player.hp = 5.0;
        let p = world.player.pos;
        world.enemy_bullets.push(EnemyBullet::new(p, Vec2::ZERO));
        Engine::with_world(world, store)
    }

    #[test]
    fn test_step_maps_events_to_cues() {
        let mut engine = Engine::new(1, MemoryStore::new());
        let input = TickInput {
            fire_held: true,
            pointer: Vec2::new(0.0, 0.0),
            ..Default::default()
        };
        let output = engine.step(&input);
        assert!(output.cues.contains(&AudioCue::Shoot));
        assert!(output.overlay.is_none());
        // Initial wave event is delivered with the first step
        assert!(matches!(output.events[0], GameEvent::WaveStarted { wave: 1, .. }));
    }

    #[test]
    fn test_game_over_records_score_once() {
        let mut engine = doomed_engine(MemoryStore::new());
        let output = engine.step(&TickInput::default());

        assert_eq!(engine.phase(), GamePhase::GameOver);
        assert_eq!(engine.scores().scores(), &[400]);
        assert_eq!(
            output.overlay,
            Some(OverlayUpdate::Show(Overlay::game_over(400, &[400])))
        );
        assert_eq!(
            engine.store_mut().get(ScoreBoard::STORAGE_KEY).unwrap().as_deref(),
            Some("[400]")
        );

        // Further ticks are no-ops and never record again
        let output = engine.step(&TickInput::default());
        assert!(output.overlay.is_none());
        assert_eq!(engine.scores().scores(), &[400]);
    }

    #[test]
    fn test_game_over_overlay_lists_previous_scores() {
        let mut store = MemoryStore::new();
        store.set(ScoreBoard::STORAGE_KEY, "[900, 100]").unwrap();
        let mut engine = doomed_engine(store);
        let output = engine.step(&TickInput::default());

        let Some(OverlayUpdate::Show(overlay)) = output.overlay else {
            panic!("expected game over overlay");
        };
        assert_eq!(
            overlay.body,
            "Your Score: 400\n\nHIGH SCORES\n1. 900\n2. 400\n3. 100\n\nPress R to Restart"
        );
    }

    #[test]
    fn test_pause_overlay_and_suppression() {
        let mut engine = Engine::new(2, MemoryStore::new());
        assert_eq!(
            engine.command(Command::Pause),
            Some(OverlayUpdate::Show(Overlay::paused()))
        );

        let before = engine.world().player.pos;
        let input = TickInput {
            movement: Movement {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        };
        engine.step(&input);
        assert_eq!(engine.world().player.pos, before);

        assert_eq!(engine.command(Command::Pause), Some(OverlayUpdate::Hide));
        engine.step(&input);
        assert_ne!(engine.world().player.pos, before);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut engine = doomed_engine(MemoryStore::new());
        assert_eq!(engine.command(Command::Restart), None);
        engine.step(&TickInput::default());

        assert_eq!(engine.command(Command::Info), None);
        assert_eq!(engine.command(Command::Restart), Some(OverlayUpdate::Hide));

        let world = engine.world();
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.wave, 1);
        assert_eq!(world.score, 0);
        assert_eq!(world.player.hp, world.player.max_hp);
        assert!(world.bullets.is_empty());
        assert!(world.enemy_bullets.is_empty());
        assert!(world.power_ups.is_empty());
        // High scores survive the restart
        assert_eq!(engine.scores().scores(), &[400]);
    }
}
