// web/ - DOM components
//
// wasm-bindgen facades over the engine cores. Scheduling, canvas painting
// and event wiring live here so the cores stay host-agnostic.

mod life;
mod raf;
mod scramble;
mod timeout;

pub use life::{GameOfLife, LifeOptions};
pub use raf::FrameLoop;
pub use scramble::{ScrambleOptions, TextScramble};
pub use timeout::Timeout;
