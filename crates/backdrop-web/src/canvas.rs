//! Canvas 2d implementation of the core drawing surface.

use backdrop_core::constants::{GLOW_FADE_STOP, TRAIL_FILL};
use backdrop_core::{Rgba, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Find the backdrop canvas and grab its 2d context. `None` (missing
/// element, wrong element type, or no context) disables the backdrop.
pub fn acquire(
    document: &web::Document,
    id: &str,
) -> Option<(web::HtmlCanvasElement, web::CanvasRenderingContext2d)> {
    let canvas = document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, ctx))
}

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn fade(&mut self, color: Rgba, width: f64, height: f64) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn glow(&mut self, center: DVec2, radius: f64, color: Rgba) {
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, &color.css());
        let _ = gradient.add_color_stop(GLOW_FADE_STOP as f32, &TRAIL_FILL.transparent().css());
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
