//! Rendering module
//!
//! Builds immediate-mode draw commands from the world; the Canvas2D backend
//! replays them in the browser.

pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use shapes::{Color, DrawCommand, build_frame};
