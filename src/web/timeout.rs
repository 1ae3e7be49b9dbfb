// timeout.rs - One-shot delayed callback guard
//
// Staged effects (multi-line intros and the like) run off plain delayed
// callbacks. The handle is owned: replacing or dropping the guard clears
// the pending timer, so nothing fires against torn-down state.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub struct Timeout {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `f` to run once after `delay_ms`
    pub fn schedule<F>(delay_ms: i32, f: F) -> Result<Timeout, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        )?;

        Ok(Timeout {
            id: Some(id),
            _closure: closure,
        })
    }

    /// Clear the pending timer, if it has not fired yet
    pub fn clear(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.clear();
    }
}
