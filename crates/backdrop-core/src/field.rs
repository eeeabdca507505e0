//! The particle collection, sized to the viewport and rebuilt on resize.

use crate::constants::{
    AREA_PER_PARTICLE, DEFAULT_PALETTE, MAX_PARTICLES, OFFSET_MAX, ORBIT_MIN,
    ORBIT_VIEWPORT_FACTOR, RADIUS_MIN, RADIUS_SPAN, SPEED_MIN, SPEED_SPAN,
};
use crate::particle::{Particle, Rgba};
use rand::Rng;
use std::f64::consts::TAU;

/// Visual configuration for the field. The palette must be non-empty;
/// every particle draws its color from it uniformly at random.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub palette: Vec<Rgba>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

/// Number of particles for a viewport in css pixels.
pub fn particle_count(width: f64, height: f64) -> usize {
    (((width * height) / AREA_PER_PARTICLE).floor() as usize).min(MAX_PARTICLES)
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
        }
    }

    /// Discard every current particle and draw a fresh set sized for the
    /// viewport. A zero-area viewport produces an empty field.
    pub fn regenerate<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        let count = particle_count(width, height);
        let orbit_span = width.max(height) * ORBIT_VIEWPORT_FACTOR;
        let palette = &self.config.palette;
        self.particles = (0..count)
            .map(|_| {
                let magnitude = rng.gen_range(SPEED_MIN..SPEED_MIN + SPEED_SPAN);
                let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                Particle {
                    angle: rng.gen_range(0.0..TAU),
                    radius: rng.gen_range(RADIUS_MIN..RADIUS_MIN + RADIUS_SPAN),
                    speed: magnitude * direction,
                    orbit: rng.gen_range(ORBIT_MIN..ORBIT_MIN + orbit_span),
                    x_offset: rng.gen_range(-OFFSET_MAX..OFFSET_MAX),
                    y_offset: rng.gen_range(-OFFSET_MAX..OFFSET_MAX),
                    color: palette[rng.gen_range(0..palette.len())],
                }
            })
            .collect();
        log::debug!(
            "field regenerated: {} particles for {:.0}x{:.0}",
            self.particles.len(),
            width,
            height
        );
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
