//! Frame painting over an abstract 2d surface.

use crate::constants::{GLOW_RADIUS_SCALE, TRAIL_FILL};
use crate::field::ParticleField;
use crate::particle::Rgba;
use crate::viewport::Viewport;
use glam::DVec2;

/// The host drawing surface. The web crate implements this over a canvas 2d
/// context; tests record the calls.
pub trait Surface {
    /// Flood the surface with a translucent fill so previous frames decay
    /// into motion trails.
    fn fade(&mut self, color: Rgba, width: f64, height: f64);
    /// Erase the surface completely.
    fn clear(&mut self, width: f64, height: f64);
    /// Draw one glow: a filled circle fading radially from `color` at the
    /// center to fully transparent at the rim.
    fn glow(&mut self, center: DVec2, radius: f64, color: Rgba);
}

/// How a frame treats what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Trail fade, for the running animation.
    Continuous,
    /// Full clear, for the single reduced-motion frame.
    Static,
}

/// Paint one frame: prepare the background, then step and draw every
/// particle at its position for `t`.
pub fn render_frame(
    surface: &mut impl Surface,
    field: &mut ParticleField,
    viewport: &Viewport,
    t: f64,
    mode: RenderMode,
) {
    match mode {
        RenderMode::Continuous => surface.fade(TRAIL_FILL, viewport.width, viewport.height),
        RenderMode::Static => surface.clear(viewport.width, viewport.height),
    }
    let center = viewport.center();
    for (index, particle) in field.particles.iter_mut().enumerate() {
        let position = particle.step(t, index, center);
        surface.glow(position, particle.radius * GLOW_RADIUS_SCALE, particle.color);
    }
}
