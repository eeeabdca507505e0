//! Core simulation for the ambient particle backdrop.
//!
//! Everything here is host-agnostic: randomness, frame scheduling, and the
//! drawing surface arrive through injected seams, so the crate compiles and
//! tests natively while the web crate supplies browser implementations.

pub mod constants;
pub mod driver;
pub mod field;
pub mod particle;
pub mod render;
pub mod viewport;

pub use driver::{Driver, Mode, Scheduler};
pub use field::{particle_count, FieldConfig, ParticleField};
pub use particle::{Particle, Rgba};
pub use render::{render_frame, RenderMode, Surface};
pub use viewport::{clamp_dpr, Viewport};
