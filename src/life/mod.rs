// life/ - Toroidal Game of Life
//
// grid.rs holds the automaton, viewport.rs the letterbox math, theme.rs
// the palette shared with the offline GIF renderer.

mod grid;
mod theme;
mod viewport;

pub use grid::{LifeConfig, LifeGrid};
pub use theme::{Color, PAPER, Theme};
pub use viewport::{Viewport, fit};
