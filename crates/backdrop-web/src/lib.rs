#![cfg(target_arch = "wasm32")]
//! Browser glue: canvas acquisition, frame scheduling, and DOM wiring for
//! the particle backdrop.

mod canvas;
mod dom;
mod schedule;
mod viewport;

use backdrop_core::{Driver, FieldConfig, Mode};
use canvas::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use schedule::RafScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "bg-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::stamp_current_year(&document);

    // Missing canvas or 2d context: the rest of the page works without us.
    let Some((canvas_el, ctx)) = canvas::acquire(&document, CANVAS_ID) else {
        log::info!("no #{CANVAS_ID} canvas with a 2d context; backdrop disabled");
        return Ok(());
    };

    let mode = if dom::prefers_reduced_motion(&window) {
        Mode::Static
    } else {
        Mode::Continuous
    };

    let scheduler = RafScheduler::new(window.clone());
    let frame_slot = scheduler.callback_slot();
    let driver = Rc::new(RefCell::new(Driver::new(
        mode,
        FieldConfig::default(),
        scheduler,
        StdRng::from_entropy(),
    )));

    // Frame callback: installed once, re-requested by the scheduler.
    {
        let driver = driver.clone();
        let mut surface = CanvasSurface::new(ctx.clone());
        *frame_slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            driver.borrow_mut().tick(timestamp, &mut surface);
        }) as Box<dyn FnMut(f64)>));
    }

    // Resize: re-run the adapter, then rebuild the field.
    {
        let driver = driver.clone();
        let canvas_el = canvas_el.clone();
        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(window) = web::window() {
                let vp = viewport::resize(&window, &canvas_el, &ctx);
                driver.borrow_mut().resize(vp);
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok();
        closure.forget();
    }

    let vp = viewport::resize(&window, &canvas_el, &ctx);
    let mut surface = CanvasSurface::new(ctx);
    driver.borrow_mut().start(vp, &mut surface);
    log::info!(
        "backdrop started: mode={:?}, {} particles",
        driver.borrow().mode(),
        driver.borrow().field.len()
    );
    Ok(())
}
