// lib.rs - Crate root and wasm entry points
//
// Two leaf-level visual effects compose into page content:
//   scramble/ - character-scramble text reveal
//   life/     - toroidal Game of Life
// web/ wraps both as DOM components. Native consumers (tests, the
// life2gif tool) link the engine cores directly.

pub mod life;
pub mod rng;
pub mod scramble;
pub mod web;

pub use life::{LifeConfig, LifeGrid};
pub use scramble::{Scramble, ScrambleConfig};

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the wasm module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"effects-engine initialized".into());
}

/// Engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
