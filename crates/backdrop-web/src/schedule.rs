//! `requestAnimationFrame`-backed implementation of the core scheduler.

use backdrop_core::Scheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// The frame closure lives in a shared slot, installed once at startup;
/// `schedule` re-requests it and hands the i32 handle to the driver.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    pub fn callback_slot(&self) -> FrameSlot {
        self.callback.clone()
    }
}

impl Scheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let closure = slot.as_ref()?;
        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        self.window.request_animation_frame(function).ok()
    }

    fn cancel(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}
