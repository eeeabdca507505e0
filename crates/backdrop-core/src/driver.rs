//! The animation driver: a two-mode state machine around the host frame
//! scheduler, owning the viewport, the particle field, and at most one
//! pending frame handle.

use crate::constants::TIME_SCALE;
use crate::field::{FieldConfig, ParticleField};
use crate::render::{render_frame, RenderMode, Surface};
use crate::viewport::Viewport;
use rand::Rng;

/// Host frame-scheduling primitive (`requestAnimationFrame` on the web).
pub trait Scheduler {
    type Handle;
    /// Request one invocation of the host frame callback. `None` means the
    /// primitive is unavailable.
    fn schedule(&mut self) -> Option<Self::Handle>;
    /// Revoke a previously scheduled invocation.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Driver mode, fixed once the driver has started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Render every frame the host schedules.
    Continuous,
    /// Render a single frame per `start` and never schedule.
    Static,
}

pub struct Driver<S: Scheduler, R: Rng> {
    pub viewport: Viewport,
    pub field: ParticleField,
    mode: Mode,
    scheduler: S,
    rng: R,
    pending: Option<S::Handle>,
}

impl<S: Scheduler, R: Rng> Driver<S, R> {
    pub fn new(mode: Mode, config: FieldConfig, scheduler: S, rng: R) -> Self {
        Self {
            viewport: Viewport::new(0.0, 0.0, 1.0),
            field: ParticleField::new(config),
            mode,
            scheduler,
            rng,
            pending: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// (Re)start the driver: cancel any pending frame, adopt the viewport,
    /// rebuild the field, then render once (static) or schedule the loop
    /// (continuous). Calling this twice never leaves two loops running.
    pub fn start(&mut self, viewport: Viewport, surface: &mut impl Surface) {
        self.cancel_pending();
        self.adopt(viewport);
        match self.mode {
            Mode::Static => self.render_static(surface),
            Mode::Continuous => {
                self.pending = self.scheduler.schedule();
                if self.pending.is_none() {
                    // No frame primitive: degrade to a single static frame.
                    self.mode = Mode::Static;
                    self.render_static(surface);
                }
            }
        }
    }

    /// Host frame callback. Renders at the host timestamp (milliseconds
    /// since navigation) and requests the next frame.
    pub fn tick(&mut self, timestamp_ms: f64, surface: &mut impl Surface) {
        if self.mode != Mode::Continuous {
            return;
        }
        self.pending = None;
        render_frame(
            surface,
            &mut self.field,
            &self.viewport,
            timestamp_ms * TIME_SCALE,
            RenderMode::Continuous,
        );
        self.pending = self.scheduler.schedule();
    }

    /// Viewport changed: adopt the new geometry and rebuild the field. A
    /// running loop has its pending frame canceled and replaced, so a
    /// resize never leaves two loops advancing the same particles.
    pub fn resize(&mut self, viewport: Viewport) {
        let was_running = self.pending.is_some();
        self.cancel_pending();
        self.adopt(viewport);
        if was_running {
            self.pending = self.scheduler.schedule();
        }
    }

    fn adopt(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.field
            .regenerate(viewport.width, viewport.height, &mut self.rng);
    }

    fn render_static(&mut self, surface: &mut impl Surface) {
        render_frame(
            surface,
            &mut self.field,
            &self.viewport,
            0.0,
            RenderMode::Static,
        );
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}
