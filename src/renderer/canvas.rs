//! Canvas2D backend

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::DrawCommand;

/// Executes draw commands on a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// `None` if the canvas has no 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn draw(&self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Clear { color } => {
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.begin_path();
                    if self
                        .ctx
                        .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                        .is_ok()
                    {
                        self.ctx.fill();
                    }
                }
            }
        }
    }
}
