//! Audio cues
//!
//! Every sound is a single procedurally generated tone - no external files.
//! The cue table is platform independent; playback uses the Web Audio API.

use crate::sim::GameEvent;

/// Base gain applied to every cue before volume settings
pub const CUE_GAIN: f32 = 0.05;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A single tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hz
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
    pub waveform: Waveform,
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Player fired
    Shoot,
    /// Enemy fired
    EnemyShot,
    /// Player touching an enemy
    ContactHit,
    /// Player struck by an enemy bullet
    BulletHit,
    /// Player bullet struck an enemy (killing blows included)
    EnemyHit,
}

impl AudioCue {
    pub fn tone(self) -> Tone {
        let (frequency, duration, waveform) = match self {
            AudioCue::Shoot => (800.0, 0.05, Waveform::Square),
            AudioCue::EnemyShot => (300.0, 0.08, Waveform::Sawtooth),
            AudioCue::ContactHit => (120.0, 0.1, Waveform::Square),
            AudioCue::BulletHit => (150.0, 0.1, Waveform::Square),
            AudioCue::EnemyHit => (600.0, 0.05, Waveform::Triangle),
        };
        Tone {
            frequency,
            duration,
            waveform,
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shot { .. } => Some(AudioCue::Shoot),
            GameEvent::EnemyShot { .. } => Some(AudioCue::EnemyShot),
            GameEvent::ContactHit => Some(AudioCue::ContactHit),
            GameEvent::BulletHit => Some(AudioCue::BulletHit),
            GameEvent::EnemyHit { .. } => Some(AudioCue::EnemyHit),
            GameEvent::EnemyKilled { .. }
            | GameEvent::PowerUpDropped { .. }
            | GameEvent::PowerUpCollected { .. }
            | GameEvent::WaveStarted { .. }
            | GameEvent::GameOver { .. } => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, OscillatorType};

    use super::{AudioCue, CUE_GAIN, Waveform};

    fn oscillator_type(waveform: Waveform) -> OscillatorType {
        match waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 1.0 }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Effective volume from settings (0.0 - 1.0)
        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        /// Play a sound effect
        pub fn play(&self, cue: AudioCue) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let tone = cue.tone();
            let (Ok(osc), Ok(gain)) = (ctx.create_oscillator(), ctx.create_gain()) else {
                return;
            };
            osc.set_type(oscillator_type(tone.waveform));
            osc.frequency().set_value(tone.frequency);
            gain.gain().set_value(CUE_GAIN * self.volume);
            if osc.connect_with_audio_node(&gain).is_err()
                || gain.connect_with_audio_node(&ctx.destination()).is_err()
            {
                return;
            }

            let t = ctx.current_time();
            osc.start().ok();
            osc.stop_with_when(t + tone.duration as f64).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_cue_table() {
        assert_eq!(
            AudioCue::Shoot.tone(),
            Tone {
                frequency: 800.0,
                duration: 0.05,
                waveform: Waveform::Square
            }
        );
        assert_eq!(AudioCue::EnemyShot.tone().waveform, Waveform::Sawtooth);
        assert_eq!(AudioCue::ContactHit.tone().frequency, 120.0);
        assert_eq!(AudioCue::BulletHit.tone().frequency, 150.0);
        assert_eq!(AudioCue::EnemyHit.tone().waveform, Waveform::Triangle);
    }

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            AudioCue::for_event(&GameEvent::Shot { bullets: 3 }),
            Some(AudioCue::Shoot)
        );
        assert_eq!(
            AudioCue::for_event(&GameEvent::EnemyHit { pos: Vec2::ZERO }),
            Some(AudioCue::EnemyHit)
        );
        assert_eq!(
            AudioCue::for_event(&GameEvent::WaveStarted { wave: 2, enemies: 3 }),
            None
        );
    }
}
