// raf.rs - requestAnimationFrame driver
//
// Holds the self-rescheduling frame closure and its handle. Two invariants
// the rest of the crate leans on: starting a loop cancels any in-flight
// callback before scheduling a new one, and cancel() always invalidates
// the pending handle (teardown included, via Drop). The driven callback
// returns false to stop the loop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type FrameClosure = Closure<dyn FnMut(f64)>;

pub struct FrameLoop {
    raf_id: Rc<RefCell<Option<i32>>>,
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            raf_id: Rc::new(RefCell::new(None)),
            closure: Rc::new(RefCell::new(None)),
        }
    }

    /// Drive `frame` once per display refresh until it returns false.
    /// Any previously scheduled callback is cancelled first.
    pub fn start<F>(&self, mut frame: F) -> Result<(), JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        self.cancel();

        let raf_id = self.raf_id.clone();
        let inner = self.closure.clone();
        *self.closure.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if !frame(now) {
                *raf_id.borrow_mut() = None;
                return;
            }
            let handle = inner.borrow();
            let Some(cb) = handle.as_ref() else { return };
            let next = web_sys::window()
                .and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            *raf_id.borrow_mut() = next;
        }) as Box<dyn FnMut(f64)>));

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let handle = self.closure.borrow();
        if let Some(cb) = handle.as_ref() {
            let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            *self.raf_id.borrow_mut() = Some(id);
        }
        Ok(())
    }

    /// Invalidate the pending callback, if any. Safe to call repeatedly.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
