// scramble.rs - TextScramble DOM component
//
// Owns a scramble engine, a frame loop and the element the rendered text
// publishes into. Hover restarts the run unless the host supplied its own
// handler, in which case the engine defers entirely. dispose() tears the
// listeners and any pending frame down.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::raf::FrameLoop;
use super::timeout::Timeout;
use crate::scramble::{OVERDRIVE_FILLER, Scramble, ScrambleConfig};

#[wasm_bindgen]
pub struct ScrambleOptions {
    cfg: ScrambleConfig,
    on_mouse_over: Option<Function>,
    on_mouse_leave: Option<Function>,
    on_animation_start: Option<Function>,
    on_animation_end: Option<Function>,
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self {
            cfg: ScrambleConfig::default(),
            on_mouse_over: None,
            on_mouse_leave: None,
            on_animation_start: None,
            on_animation_end: None,
        }
    }
}

#[wasm_bindgen]
impl ScrambleOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_speed(&mut self, v: f64) {
        self.cfg.speed = v.max(0.0);
    }

    pub fn set_tick(&mut self, v: u32) {
        self.cfg.tick = v.max(1);
    }

    pub fn set_step(&mut self, v: u32) {
        self.cfg.step = v as usize;
    }

    pub fn set_chance(&mut self, v: f64) {
        self.cfg.chance = v.clamp(0.0, 1.0);
    }

    pub fn set_seed(&mut self, v: u32) {
        self.cfg.seed = v as usize;
    }

    pub fn set_scramble(&mut self, v: u32) {
        self.cfg.scramble = v;
    }

    /// Characters that always render as themselves
    pub fn set_ignore(&mut self, chars: &str) {
        self.cfg.ignore = chars.chars().collect();
    }

    /// Inclusive code-point range noise glyphs are drawn from
    pub fn set_range(&mut self, lo: u32, hi: u32) {
        self.cfg.range = vec![lo.min(hi), lo.max(hi)];
    }

    /// Explicit code-point list noise glyphs are drawn from
    pub fn set_range_list(&mut self, codes: Vec<u32>) {
        if !codes.is_empty() {
            self.cfg.range = codes;
        }
    }

    pub fn set_overdrive(&mut self, on: bool) {
        self.cfg.overdrive = on.then_some(OVERDRIVE_FILLER);
    }

    pub fn set_overdrive_glyph(&mut self, code: u32) {
        self.cfg.overdrive = Some(code);
    }

    pub fn set_overflow(&mut self, v: bool) {
        self.cfg.overflow = v;
    }

    pub fn set_play_on_mount(&mut self, v: bool) {
        self.cfg.play_on_mount = v;
    }

    /// Custom hover handler; supplying one suppresses the implicit restart
    pub fn set_on_mouse_over(&mut self, f: Function) {
        self.on_mouse_over = Some(f);
    }

    pub fn set_on_mouse_leave(&mut self, f: Function) {
        self.on_mouse_leave = Some(f);
    }

    pub fn set_on_animation_start(&mut self, f: Function) {
        self.on_animation_start = Some(f);
    }

    pub fn set_on_animation_end(&mut self, f: Function) {
        self.on_animation_end = Some(f);
    }
}

struct Shared {
    engine: Scramble,
    element: Element,
    published: String,
    on_start: Option<Function>,
    on_end: Option<Function>,
}

impl Shared {
    fn publish(&mut self) {
        if self.engine.output() != self.published {
            self.published = self.engine.output().to_string();
            self.element.set_text_content(Some(&self.published));
        }
    }

    fn fire(cb: &Option<Function>) {
        if let Some(f) = cb {
            let _ = f.call0(&JsValue::NULL);
        }
    }
}

type Listener = Closure<dyn FnMut()>;

#[wasm_bindgen]
pub struct TextScramble {
    shared: Rc<RefCell<Shared>>,
    frames: Rc<FrameLoop>,
    element: Element,
    hover: Option<Listener>,
    leave: Option<Listener>,
    delayed: Option<Timeout>,
}

#[wasm_bindgen]
impl TextScramble {
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: Element,
        text: &str,
        options: Option<ScrambleOptions>,
    ) -> Result<TextScramble, JsValue> {
        let opts = options.unwrap_or_default();
        let mut cfg = opts.cfg;
        cfg.text = text.to_string();
        let play = cfg.play_on_mount;

        let shared = Rc::new(RefCell::new(Shared {
            engine: Scramble::new(cfg),
            element: element.clone(),
            published: String::new(),
            on_start: opts.on_animation_start,
            on_end: opts.on_animation_end,
        }));
        let frames = Rc::new(FrameLoop::new());

        let mut component = TextScramble {
            shared,
            frames,
            element,
            hover: None,
            leave: None,
            delayed: None,
        };

        if play {
            restart(&component.shared, &component.frames)?;
        } else {
            let mut s = component.shared.borrow_mut();
            s.engine.settle();
            s.publish();
        }

        let hover: Listener = match opts.on_mouse_over {
            Some(f) => Closure::wrap(Box::new(move || {
                let _ = f.call0(&JsValue::NULL);
            })),
            None => {
                let shared = component.shared.clone();
                let frames = component.frames.clone();
                Closure::wrap(Box::new(move || {
                    let _ = restart(&shared, &frames);
                }))
            }
        };
        component
            .element
            .add_event_listener_with_callback("mouseover", hover.as_ref().unchecked_ref())?;
        component.hover = Some(hover);

        if let Some(f) = opts.on_mouse_leave {
            let leave: Listener = Closure::wrap(Box::new(move || {
                let _ = f.call0(&JsValue::NULL);
            }));
            component
                .element
                .add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
            component.leave = Some(leave);
        }

        Ok(component)
    }

    /// Restart the reveal from scratch, as the hover trigger does
    pub fn play(&self) -> Result<(), JsValue> {
        restart(&self.shared, &self.frames)
    }

    /// Restart after a delay; staged multi-line intros chain these.
    /// A pending delay is cleared before the new one is scheduled.
    pub fn play_delayed(&mut self, delay_ms: i32) -> Result<(), JsValue> {
        let shared = self.shared.clone();
        let frames = self.frames.clone();
        let timer = Timeout::schedule(delay_ms, move || {
            let _ = restart(&shared, &frames);
        })?;
        self.delayed = Some(timer);
        Ok(())
    }

    /// Swap the target text without restarting the current run
    pub fn set_text(&self, text: &str) {
        self.shared.borrow_mut().engine.set_text(text);
    }

    pub fn text(&self) -> String {
        self.shared.borrow().engine.output().to_string()
    }

    pub fn is_animating(&self) -> bool {
        self.shared.borrow().engine.is_animating()
    }

    /// Cancel the pending frame and any staged timer, and detach the
    /// listeners
    pub fn dispose(&mut self) {
        self.frames.cancel();
        self.delayed = None;
        if let Some(cb) = self.hover.take() {
            let _ = self
                .element
                .remove_event_listener_with_callback("mouseover", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = self.leave.take() {
            let _ = self
                .element
                .remove_event_listener_with_callback("mouseleave", cb.as_ref().unchecked_ref());
        }
    }
}

// Cancel-before-reschedule, then drive the engine until it settles.
// Callbacks fire only after the state borrow is released, so a handler may
// synchronously call back into the component.
fn restart(shared: &Rc<RefCell<Shared>>, frames: &Rc<FrameLoop>) -> Result<(), JsValue> {
    frames.cancel();
    let on_start = {
        let mut s = shared.borrow_mut();
        s.engine.start();
        s.on_start.clone()
    };
    Shared::fire(&on_start);

    let shared = shared.clone();
    frames.start(move |now| {
        let (live, ended) = {
            let mut s = shared.borrow_mut();
            let was_animating = s.engine.is_animating();
            let live = s.engine.frame(now);
            s.publish();
            let ended = was_animating && !s.engine.is_animating();
            (live, ended.then(|| s.on_end.clone()))
        };
        if let Some(on_end) = ended {
            Shared::fire(&on_end);
        }
        live
    })
}
