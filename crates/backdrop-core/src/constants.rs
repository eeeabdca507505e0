use crate::particle::Rgba;

// Shared tuning constants for the backdrop simulation and renderer.

// Field sizing
pub const AREA_PER_PARTICLE: f64 = 18_000.0; // css px^2 of viewport per particle
pub const MAX_PARTICLES: usize = 90;

// Per-particle parameter ranges (min + span, half-open)
pub const RADIUS_MIN: f64 = 0.5;
pub const RADIUS_SPAN: f64 = 1.8;
pub const SPEED_MIN: f64 = 0.000_35;
pub const SPEED_SPAN: f64 = 0.000_70;
pub const ORBIT_MIN: f64 = 60.0;
pub const ORBIT_VIEWPORT_FACTOR: f64 = 0.6; // of max(width, height)
pub const OFFSET_MAX: f64 = 90.0; // offsets drawn from [-OFFSET_MAX, OFFSET_MAX)

// Motion
pub const TIME_SCALE: f64 = 0.000_3; // host ms timestamps -> slow phase
pub const WOBBLE_X_RATE: f64 = 2.0;
pub const WOBBLE_Y_RATE: f64 = 1.5;
pub const WOBBLE_AMPLITUDE: f64 = 15.0;
pub const ORBIT_Y_COMPRESSION: f64 = 0.55; // flattens orbits into ellipses

// Rendering
pub const GLOW_RADIUS_SCALE: f64 = 12.0; // drawn radius = particle radius * this
pub const GLOW_FADE_STOP: f64 = 0.8; // gradient offset where the glow is fully transparent
pub const TRAIL_FILL: Rgba = Rgba::new(4, 1, 15, 0.09); // translucent overlay for motion trails

// Device pixel ratio clamp for the backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Default palette (cyan, purple, magenta)
pub const DEFAULT_PALETTE: [Rgba; 3] = [
    Rgba::new(36, 246, 255, 0.85),
    Rgba::new(164, 61, 255, 0.85),
    Rgba::new(255, 45, 146, 0.85),
];
