// life.rs - GameOfLife canvas component
//
// Paints every display refresh so resizing feels responsive; the automaton
// itself steps at most once per configured interval. Resize only touches
// the backing store, never the generation state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ResizeObserver};

use super::raf::FrameLoop;
use crate::life::{LifeConfig, LifeGrid, PAPER, fit};

// Retina is plenty; higher ratios just burn fill rate.
const MAX_DPR: f64 = 2.0;

#[wasm_bindgen]
pub struct LifeOptions {
    cfg: LifeConfig,
}

impl Default for LifeOptions {
    fn default() -> Self {
        Self {
            cfg: LifeConfig::default(),
        }
    }
}

#[wasm_bindgen]
impl LifeOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(&mut self, v: u32) {
        self.cfg.width = v.max(1);
    }

    pub fn set_height(&mut self, v: u32) {
        self.cfg.height = v.max(1);
    }

    pub fn set_cell_size(&mut self, v: u32) {
        self.cfg.cell_size = v.max(1);
    }

    pub fn set_seed(&mut self, v: u32) {
        self.cfg.seed = v;
    }

    pub fn set_alive_prob(&mut self, v: f64) {
        self.cfg.alive_prob = v.clamp(0.0, 1.0);
    }

    pub fn set_step_interval_ms(&mut self, v: f64) {
        self.cfg.step_interval_ms = v.max(0.0);
    }
}

struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    background: String,
    ink: String,
    grid_lines: String,
}

impl Surface {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            dpr: 1.0,
            background: PAPER.background.css(),
            ink: PAPER.ink.css(),
            grid_lines: PAPER.grid.css(),
        })
    }

    // Match the backing store to the container at device resolution.
    fn resize(&mut self) -> Result<(), JsValue> {
        let Some(parent) = self.canvas.parent_element() else {
            return Ok(());
        };
        let display_w = parent.client_width();
        let display_h = parent.client_height();
        if display_w <= 0 || display_h <= 0 {
            return Ok(());
        }

        self.dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0)
            .clamp(1.0, MAX_DPR);
        self.canvas
            .set_width((display_w as f64 * self.dpr).round() as u32);
        self.canvas
            .set_height((display_h as f64 * self.dpr).round() as u32);

        let style = self.canvas.style();
        style.set_property("width", &format!("{display_w}px"))?;
        style.set_property("height", &format!("{display_h}px"))?;

        self.ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        Ok(())
    }

    fn paint(&mut self, grid: &LifeGrid) -> Result<(), JsValue> {
        let Some(parent) = self.canvas.parent_element() else {
            return Ok(());
        };
        let display_w = parent.client_width() as f64;
        let display_h = parent.client_height() as f64;
        if display_w <= 0.0 || display_h <= 0.0 {
            return Ok(());
        }

        // The backing store can lag the first layout; catch it up.
        let want_w = (display_w * self.dpr).round() as u32;
        let want_h = (display_h * self.dpr).round() as u32;
        if self.canvas.width() != want_w || self.canvas.height() != want_h {
            self.resize()?;
        }

        let cell = grid.config().cell_size as f64;
        let logical_w = grid.cols() as f64 * cell;
        let logical_h = grid.rows() as f64 * cell;
        let vp = fit(display_w, display_h, logical_w, logical_h);

        let ctx = &self.ctx;
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        ctx.set_fill_style_str(&self.background);
        ctx.fill_rect(0.0, 0.0, display_w, display_h);

        ctx.translate(vp.offset_x, vp.offset_y)?;
        ctx.scale(vp.scale, vp.scale)?;

        // Separator lines as filled rects; strokes blur at half-pixel
        // offsets.
        let t = vp.hairline;
        ctx.set_fill_style_str(&self.grid_lines);
        let mut x = 0.0;
        while x <= logical_w {
            ctx.fill_rect(x - t / 2.0, 0.0, t, logical_h);
            x += cell;
        }
        let mut y = 0.0;
        while y <= logical_h {
            ctx.fill_rect(0.0, y - t / 2.0, logical_w, t);
            y += cell;
        }

        // Live cells inset by the hairline so separators stay visible.
        ctx.set_fill_style_str(&self.ink);
        let inset = t;
        let side = (cell - 2.0 * inset).max(0.0);
        let cells = grid.cells();
        for r in 0..grid.rows() {
            let y = r as f64 * cell;
            let row = r * grid.cols();
            for c in 0..grid.cols() {
                if cells[row + c] == 1 {
                    ctx.fill_rect(c as f64 * cell + inset, y + inset, side, side);
                }
            }
        }

        Ok(())
    }
}

#[wasm_bindgen]
pub struct GameOfLife {
    grid: Rc<RefCell<LifeGrid>>,
    frames: Rc<FrameLoop>,
    observer: Option<ResizeObserver>,
    _resize_cb: Option<Closure<dyn FnMut()>>,
}

#[wasm_bindgen]
impl GameOfLife {
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        options: Option<LifeOptions>,
    ) -> Result<GameOfLife, JsValue> {
        let cfg = options.map(|o| o.cfg).unwrap_or_default();

        let grid = Rc::new(RefCell::new(LifeGrid::new(cfg)));
        let surface = Rc::new(RefCell::new(Surface::new(canvas.clone())?));
        surface.borrow_mut().resize()?;

        // Redraws happen on the frame loop; the observer only resyncs the
        // backing store.
        let resize_cb: Closure<dyn FnMut()> = {
            let surface = surface.clone();
            Closure::wrap(Box::new(move || {
                let _ = surface.borrow_mut().resize();
            }))
        };
        let observer = ResizeObserver::new(resize_cb.as_ref().unchecked_ref())?;
        if let Some(parent) = canvas.parent_element() {
            observer.observe(&parent);
        }

        let frames = Rc::new(FrameLoop::new());
        {
            let grid = grid.clone();
            let surface = surface.clone();
            frames.start(move |now| {
                grid.borrow_mut().advance(now);
                let _ = surface.borrow_mut().paint(&grid.borrow());
                true
            })?;
        }

        Ok(GameOfLife {
            grid,
            frames,
            observer: Some(observer),
            _resize_cb: Some(resize_cb),
        })
    }

    /// Apply new options; generation state is preserved unless the seeding
    /// key (dimensions, cell size, seed, probability) changed.
    pub fn reconfigure(&self, options: LifeOptions) {
        self.grid.borrow_mut().reconfigure(options.cfg);
    }

    /// Advance one generation immediately, ignoring the interval gate
    pub fn step_now(&self) {
        self.grid.borrow_mut().step();
    }

    /// Cancel the frame loop and stop observing resizes
    pub fn dispose(&mut self) {
        self.frames.cancel();
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self._resize_cb = None;
    }
}
