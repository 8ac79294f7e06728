// Surface implementation over a canvas element's 2d context

use crate::color::Color;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let context = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.context.begin_path();
        if let Err(err) = self.context.arc(x, y, radius, 0.0, PI * 2.0) {
            log!("arc({}, {}, {}) failed: {:?}", x, y, radius, err);
            return;
        }
        self.context.fill();
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        if let Err(err) = self.context.translate(x, y) {
            log!("translate({}, {}) failed: {:?}", x, y, err);
        }
    }

    fn rotate(&mut self, angle: f64) {
        if let Err(err) = self.context.rotate(angle) {
            log!("rotate({}) failed: {:?}", angle, err);
        }
    }

    fn set_fill_color(&mut self, color: &Color) {
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.context.set_global_alpha(alpha);
    }
}
