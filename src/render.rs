// Canvas side of the particle field. On creation grabs the 2d context from
// the canvas element; failing that the whole field effect stays off.

use crate::color;
use crate::field::ParticleField;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct FieldRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl FieldRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<FieldRenderer, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(FieldRenderer { canvas, context })
    }

    // Keep the backing store the same size as the viewport
    pub fn fit_to(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    pub fn draw(&self, field: &ParticleField) -> Result<(), JsValue> {
        let (width, height) = field.size();
        self.context.clear_rect(0.0, 0.0, width, height);

        for particle in field.particles() {
            self.context.begin_path();
            self.context.arc(
                particle.pos[0],
                particle.pos[1],
                particle.radius,
                0.0,
                std::f64::consts::PI * 2.0,
            )?;
            self.context
                .set_fill_style(&JsValue::from_str(&particle.color.to_rgba(particle.opacity)));
            self.context.fill();
        }

        if field.draws_connections() {
            self.context.set_line_width(ParticleField::LINE_WIDTH);
            for line in field.connections() {
                self.context.begin_path();
                self.context.set_stroke_style(&JsValue::from_str(
                    &color::CONNECTION_COLOR.to_rgba(line.opacity),
                ));
                self.context.move_to(line.from[0], line.from[1]);
                self.context.line_to(line.to[0], line.to[1]);
                self.context.stroke();
            }
        }

        Ok(())
    }
}
