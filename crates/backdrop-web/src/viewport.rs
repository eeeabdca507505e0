//! Viewport adapter: window geometry onto the canvas backing store.

use backdrop_core::Viewport;
use web_sys as web;

/// Read the window size and device pixel ratio, size the canvas backing
/// store, pin its css size to the logical size, and install the transform
/// that maps logical-pixel drawing onto the scaled store. Returns the
/// viewport the field should be sized for.
pub fn resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let viewport = Viewport::new(width, height, window.device_pixel_ratio());

    let (backing_w, backing_h) = viewport.backing_size();
    canvas.set_width(backing_w);
    canvas.set_height(backing_h);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    let _ = ctx.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0);

    viewport
}
