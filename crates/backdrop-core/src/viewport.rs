//! Viewport geometry in css pixels plus the clamped device pixel ratio.

use crate::constants::{DPR_MAX, DPR_MIN};
use glam::DVec2;

/// Clamp a reported device pixel ratio to the range used for the backing
/// store.
pub fn clamp_dpr(raw: f64) -> f64 {
    raw.clamp(DPR_MIN, DPR_MAX)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, raw_dpr: f64) -> Self {
        Self {
            width,
            height,
            dpr: clamp_dpr(raw_dpr),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Orbit origin shared by every particle.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Backing-store size in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr) as u32,
            (self.height * self.dpr) as u32,
        )
    }
}
