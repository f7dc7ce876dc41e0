//! Canvas 2D renderer
//!
//! Replays the draw list from [`crate::scene`] onto a canvas context.

use game_core::{Renderer, Snapshot};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::scene::{build_scene, DrawCommand};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn draw(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
            }
            DrawCommand::DashedLine {
                from,
                to,
                dash,
                color,
            } => {
                let pattern =
                    js_sys::Array::of2(&JsValue::from_f64(dash[0]), &JsValue::from_f64(dash[1]));
                ctx.set_line_dash(&pattern)?;
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                ctx.move_to(from.0, from.1);
                ctx.line_to(to.0, to.1);
                ctx.stroke();
                // Reset so later strokes are solid
                ctx.set_line_dash(&js_sys::Array::new())?;
            }
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(*x, *y, *width, *height);
            }
            DrawCommand::Circle {
                x,
                y,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(*x, *y, *radius, 0.0, std::f64::consts::TAU)?;
                ctx.fill();
            }
            DrawCommand::Text {
                text,
                x,
                y,
                font,
                color,
            } => {
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, *x, *y)?;
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn render(&mut self, snapshot: &Snapshot) -> Result<(), String> {
        for command in build_scene(snapshot) {
            self.draw(&command)
                .map_err(|err| format!("canvas draw failed: {:?}", err))?;
        }
        Ok(())
    }
}
