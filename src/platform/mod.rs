//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (fixed-step accumulator)
//! - Input events (keys and pointer into tick snapshots)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::InputState;
