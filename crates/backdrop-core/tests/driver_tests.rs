// Tests for the animation driver state machine, using a mock scheduler and
// a recording surface in place of the browser primitives.

use backdrop_core::{Driver, FieldConfig, Mode, Rgba, Scheduler, Surface, Viewport};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct MockState {
    next_handle: i32,
    scheduled: Vec<i32>,
    canceled: Vec<i32>,
    available: bool,
}

/// Frame scheduler with inspectable schedule/cancel history.
#[derive(Clone)]
struct MockScheduler(Rc<RefCell<MockState>>);

impl MockScheduler {
    fn available() -> Self {
        Self(Rc::new(RefCell::new(MockState {
            available: true,
            ..Default::default()
        })))
    }

    fn unavailable() -> Self {
        Self(Rc::new(RefCell::new(MockState::default())))
    }
}

impl Scheduler for MockScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let mut state = self.0.borrow_mut();
        if !state.available {
            return None;
        }
        state.next_handle += 1;
        let handle = state.next_handle;
        state.scheduled.push(handle);
        Some(handle)
    }

    fn cancel(&mut self, handle: i32) {
        self.0.borrow_mut().canceled.push(handle);
    }
}

/// Surface that records every call instead of drawing.
#[derive(Default)]
struct RecordingSurface {
    fades: usize,
    clears: usize,
    glows: Vec<(DVec2, f64, Rgba)>,
}

impl Surface for RecordingSurface {
    fn fade(&mut self, _color: Rgba, _width: f64, _height: f64) {
        self.fades += 1;
    }

    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn glow(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.glows.push((center, radius, color));
    }
}

fn driver(mode: Mode, scheduler: MockScheduler) -> Driver<MockScheduler, StdRng> {
    Driver::new(
        mode,
        FieldConfig::default(),
        scheduler,
        StdRng::seed_from_u64(42),
    )
}

fn large_viewport() -> Viewport {
    Viewport::new(1800.0, 1000.0, 1.0)
}

#[test]
fn static_mode_renders_once_and_never_schedules() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Static, sched.clone());
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    assert_eq!(surface.clears, 1, "static mode clears instead of fading");
    assert_eq!(surface.fades, 0);
    assert_eq!(surface.glows.len(), 90);
    assert!(
        sched.0.borrow().scheduled.is_empty(),
        "static mode must never schedule"
    );

    // Stray ticks are ignored.
    d.tick(1000.0, &mut surface);
    assert_eq!(surface.clears + surface.fades, 1);
}

#[test]
fn static_mode_renders_at_time_zero() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Static, sched);
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    let center = DVec2::new(900.0, 500.0);
    for (i, (position, radius, color)) in surface.glows.iter().enumerate() {
        // The stored angle already includes the one step taken during render.
        let p = &d.field.particles[i];
        let wobble_x = (i as f64).sin() * 15.0;
        let wobble_y = (i as f64).cos() * 15.0;
        let expected = DVec2::new(
            center.x + p.angle.cos() * p.orbit + p.x_offset + wobble_x,
            center.y + p.angle.sin() * p.orbit * 0.55 + p.y_offset + wobble_y,
        );
        assert!(
            (*position - expected).length() < 1e-9,
            "particle {i} not rendered at t = 0"
        );
        assert!((radius - p.radius * 12.0).abs() < 1e-12);
        assert_eq!(*color, p.color);
    }
}

#[test]
fn continuous_start_schedules_without_rendering() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Continuous, sched.clone());
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    assert_eq!(
        surface.fades + surface.clears,
        0,
        "continuous mode waits for the first tick"
    );
    assert_eq!(sched.0.borrow().scheduled.len(), 1);
    assert!(sched.0.borrow().canceled.is_empty());
}

#[test]
fn tick_renders_and_reschedules() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Continuous, sched.clone());
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    let before: Vec<(f64, f64)> = d.field.particles.iter().map(|p| (p.angle, p.speed)).collect();

    d.tick(1000.0, &mut surface);
    assert_eq!(surface.fades, 1, "continuous frames fade, never clear");
    assert_eq!(surface.clears, 0);
    assert_eq!(surface.glows.len(), 90);
    assert_eq!(sched.0.borrow().scheduled.len(), 2);

    for (p, (angle, speed)) in d.field.particles.iter().zip(&before) {
        assert_eq!(
            p.angle,
            angle + speed,
            "angle must advance by exactly the particle's own speed"
        );
    }
}

#[test]
fn tick_scales_the_host_timestamp() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Continuous, sched);
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    d.tick(10_000.0, &mut surface);

    let t = 10_000.0 * 0.000_3;
    let center = DVec2::new(900.0, 500.0);
    for (i, (position, _, _)) in surface.glows.iter().enumerate() {
        let p = &d.field.particles[i];
        let wobble_x = (t * 2.0 + i as f64).sin() * 15.0;
        let wobble_y = (t * 1.5 + i as f64).cos() * 15.0;
        let expected = DVec2::new(
            center.x + p.angle.cos() * p.orbit + p.x_offset + wobble_x,
            center.y + p.angle.sin() * p.orbit * 0.55 + p.y_offset + wobble_y,
        );
        assert!(
            (*position - expected).length() < 1e-9,
            "particle {i} not rendered at the scaled timestamp"
        );
    }
}

#[test]
fn restart_cancels_the_pending_frame() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Continuous, sched.clone());
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    d.start(large_viewport(), &mut surface);

    let state = sched.0.borrow();
    assert_eq!(state.scheduled.len(), 2);
    assert_eq!(
        state.canceled,
        vec![state.scheduled[0]],
        "restart must cancel exactly the previously scheduled frame"
    );
}

#[test]
fn resize_cancels_and_replaces_the_loop() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Continuous, sched.clone());
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    d.resize(Viewport::new(300.0, 300.0, 1.0));

    {
        let state = sched.0.borrow();
        assert_eq!(state.canceled, vec![state.scheduled[0]]);
        assert_eq!(state.scheduled.len(), 2);
    }
    assert_eq!(d.field.len(), 5, "field must regenerate for the new area");
    assert_eq!(d.viewport.width, 300.0);

    // The loop keeps running against the new state.
    d.tick(500.0, &mut surface);
    assert_eq!(surface.fades, 1);
    assert_eq!(surface.glows.len(), 5);
}

#[test]
fn resize_before_start_does_not_begin_a_loop() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Continuous, sched.clone());

    d.resize(large_viewport());
    assert!(sched.0.borrow().scheduled.is_empty());
    assert_eq!(d.field.len(), 90, "the field still adopts the geometry");
}

#[test]
fn unavailable_scheduler_demotes_to_a_static_frame() {
    let sched = MockScheduler::unavailable();
    let mut d = driver(Mode::Continuous, sched);
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    assert_eq!(d.mode(), Mode::Static);
    assert_eq!(surface.clears, 1);
    assert_eq!(surface.glows.len(), 90);

    d.tick(16.0, &mut surface);
    assert_eq!(
        surface.clears + surface.fades,
        1,
        "a demoted driver must ignore ticks"
    );
}

#[test]
fn static_resize_regenerates_without_rendering() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Static, sched.clone());
    let mut surface = RecordingSurface::default();

    d.start(large_viewport(), &mut surface);
    d.resize(Viewport::new(300.0, 300.0, 1.0));

    assert_eq!(d.field.len(), 5);
    assert_eq!(surface.clears, 1, "static mode renders only on start");
    assert!(sched.0.borrow().scheduled.is_empty());
}

#[test]
fn zero_area_viewport_renders_no_particles() {
    let sched = MockScheduler::available();
    let mut d = driver(Mode::Continuous, sched.clone());
    let mut surface = RecordingSurface::default();

    d.start(Viewport::new(0.0, 0.0, 1.0), &mut surface);
    assert_eq!(sched.0.borrow().scheduled.len(), 1);

    d.tick(16.0, &mut surface);
    assert_eq!(surface.fades, 1, "the frame still fades the surface");
    assert!(surface.glows.is_empty(), "no particles for a zero area");
}
