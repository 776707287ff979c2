//! Fixed-step frame clock
//!
//! Converts display-frame timestamps into a whole number of simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame gap we simulate (seconds); longer gaps are dropped
const MAX_FRAME_DT: f32 = 0.1;
/// Frame gaps this close to `SIM_DT` count as exactly one tick (rAF jitter)
const SNAP_TOLERANCE: f32 = 0.003;

#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
    // FPS tracking
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_time: None,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Register a frame at `time_ms`; returns how many ticks to run
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time_ms);
        let dt = if (dt - SIM_DT).abs() <= SNAP_TOLERANCE {
            SIM_DT
        } else {
            dt.clamp(0.0, MAX_FRAME_DT)
        };
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }

        self.track_fps(time_ms);
        ticks
    }

    /// Forget the last timestamp (after the tab was hidden, for example)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest sample is the one we will overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((self.frame_times.len() - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_runs_one_tick() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1000.0), 1);
    }

    #[test]
    fn test_long_frame_runs_multiple_ticks() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        // 40ms = 2.4 ticks
        assert_eq!(clock.advance(1040.0), 2);
    }

    #[test]
    fn test_jittered_frames_run_one_tick_each() {
        let mut clock = FrameClock::new();
        let mut time = 1000.0;
        assert_eq!(clock.advance(time), 1);
        for i in 0..60 {
            time += if i % 2 == 0 { 16.4 } else { 16.9 };
            assert_eq!(clock.advance(time), 1, "frame {i}");
        }
    }

    #[test]
    fn test_high_refresh_rate_alternates() {
        let mut clock = FrameClock::new();
        let mut time = 1000.0;
        clock.advance(time);
        let mut total = 0;
        for _ in 0..120 {
            time += 1000.0 / 120.0;
            total += clock.advance(time);
        }
        // One second at 120 Hz is ~60 ticks
        assert!((59..=60).contains(&total), "total = {total}");
    }

    #[test]
    fn test_substeps_are_capped() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(1100.0), MAX_SUBSTEPS);
    }

    #[test]
    fn test_time_going_backwards_runs_nothing() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0);
    }

    #[test]
    fn test_fps_at_sixty_hz() {
        let mut clock = FrameClock::new();
        for i in 0..120 {
            clock.advance(1000.0 + i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(clock.fps(), 60);
    }
}
