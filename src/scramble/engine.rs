// engine.rs - Scramble state machine
//
// One struct owns every mutable piece: the frame buffer, both cursors, the
// tick counter and the RNG. The host drives frame(now) once per display
// refresh; the update phases are gated to the frame interval derived from
// `speed`, and every render publishes into `output`.

use crate::rng::Lcg;

use super::cell::Cell;
use super::config::ScrambleConfig;

// Engine-owned RNG seed: every run of one configuration is reproducible.
const RNG_SEED: u32 = 0xC0FF_EE11;

pub struct Scramble {
    cfg: ScrambleConfig,
    target: Vec<char>,

    cells: Vec<Cell>,
    revealed: usize,
    overdrive_cursor: usize,
    tick_count: u64,

    frame_time_ms: f64,
    last_update_ms: f64,
    animating: bool,

    output: String,
    rng: Lcg,
}

impl Scramble {
    pub fn new(cfg: ScrambleConfig) -> Self {
        let mut cfg = cfg;
        cfg.tick = cfg.tick.max(1);
        cfg.chance = cfg.chance.clamp(0.0, 1.0);
        if cfg.range.is_empty() {
            cfg.range = ScrambleConfig::default().range;
        }

        let target: Vec<char> = cfg.text.chars().collect();
        let frame_time_ms = if cfg.speed > 0.0 {
            1000.0 / (60.0 * cfg.speed)
        } else {
            f64::INFINITY
        };

        Self {
            target,
            cells: Vec::new(),
            revealed: 0,
            overdrive_cursor: 0,
            tick_count: 0,
            frame_time_ms,
            last_update_ms: 0.0,
            animating: false,
            output: String::new(),
            rng: Lcg::new(RNG_SEED),
            cfg,
        }
    }

    /// Reset cursors and counters and (re)arm the run. The caller must
    /// cancel any in-flight frame callback first; the web facade does.
    pub fn start(&mut self) {
        self.tick_count = 0;
        self.revealed = 0;
        self.overdrive_cursor = 0;
        if !self.cfg.overflow {
            self.cells.clear();
            self.cells.resize(self.target.len(), Cell::Pending);
        }
        self.animating = true;
    }

    /// Show the settled target immediately, cursors parked at the end.
    pub fn settle(&mut self) {
        self.cells = self.target.iter().copied().map(Cell::Literal).collect();
        self.revealed = self.target.len();
        self.overdrive_cursor = self.target.len();
        self.tick_count = self.target.len() as u64;
        self.animating = false;
        self.render();
    }

    /// Swap the target text without resetting the run. The buffer adjusts
    /// toward the new length over subsequent updates.
    pub fn set_text(&mut self, text: &str) {
        self.cfg.text = text.to_string();
        self.target = self.cfg.text.chars().collect();
    }

    /// One per-frame update. Returns true while the run is still live;
    /// false tells the scheduler to stop rescheduling.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.cfg.speed <= 0.0 || !self.animating {
            return false;
        }

        self.apply_overdrive();

        if now_ms - self.last_update_ms > self.frame_time_ms {
            self.last_update_ms = now_ms;
            if self.tick_count % u64::from(self.cfg.tick) == 0 {
                self.reveal();
                self.adjust_length();
                self.refresh_scramble();
            }
            self.render();
        }

        self.animating
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // Force-resolve the next `step` positions to the filler glyph, ahead of
    // the reveal cursor.
    fn apply_overdrive(&mut self) {
        let Some(code) = self.cfg.overdrive else {
            return;
        };
        let filler = char::from_u32(code).unwrap_or('_');

        for _ in 0..self.cfg.step {
            let max_len = self.cells.len().max(self.target.len());
            if self.overdrive_cursor >= max_len {
                break;
            }
            let ch = match self.target.get(self.overdrive_cursor) {
                Some(&c) if self.cfg.ignore.contains(&c) => c,
                _ => filler,
            };
            if self.overdrive_cursor < self.cells.len() {
                self.cells[self.overdrive_cursor] = Cell::Literal(ch);
            } else {
                self.cells.resize(self.overdrive_cursor, Cell::Pending);
                self.cells.push(Cell::Literal(ch));
            }
            self.overdrive_cursor += 1;
        }
    }

    // Advance the reveal cursor by up to `step`; each newly passed position
    // either enters a scrambling countdown or resolves on the next render.
    fn reveal(&mut self) {
        for _ in 0..self.cfg.step {
            if self.revealed >= self.target.len() {
                break;
            }
            let ch = self.target[self.revealed];
            let cell = if self.cfg.ignore.contains(&ch) {
                Cell::Literal(ch)
            } else if self.roll_chance() {
                let jitter = self.rng.range_inclusive(0, self.cfg.scramble.div_ceil(2));
                Cell::Scrambling(self.cfg.scramble + jitter)
            } else {
                Cell::Scrambling(0)
            };
            if self.revealed < self.cells.len() {
                self.cells[self.revealed] = cell;
            } else {
                self.cells.resize(self.revealed, Cell::Pending);
                self.cells.push(cell);
            }
            self.revealed += 1;
        }
    }

    // Grow or shrink the buffer toward the target length, `step` at a time.
    fn adjust_length(&mut self) {
        if self.target.len() < self.cells.len() {
            self.cells.pop();
            let from = self.target.len().min(self.cells.len());
            let to = (from + self.cfg.step).min(self.cells.len());
            self.cells.drain(from..to);
        }

        for _ in 0..self.cfg.step {
            if self.cells.len() >= self.target.len() {
                break;
            }
            let cell = match self.target.get(self.cells.len()) {
                Some(&c) if self.cfg.ignore.contains(&c) => Cell::Literal(c),
                _ => Cell::Pending,
            };
            self.cells.push(cell);
        }
    }

    // Re-roll `seed` random positions at or beyond the reveal cursor so
    // settled stragglers keep churning until the cursor reaches them.
    fn refresh_scramble(&mut self) {
        if self.revealed == self.target.len() {
            return;
        }
        for _ in 0..self.cfg.seed {
            // The dice are inclusive like everywhere else; the
            // one-past-the-end hit is simply skipped.
            let index = self
                .rng
                .range_inclusive(self.revealed as u32, self.cells.len() as u32)
                as usize;
            if index >= self.cells.len() {
                continue;
            }
            let Cell::Literal(c) = self.cells[index] else {
                continue;
            };
            if self.cfg.ignore.contains(&c) {
                continue;
            }
            self.cells[index] = if self.roll_chance() {
                let frames = if self.cfg.scramble > 0 {
                    self.cfg.scramble
                } else {
                    self.cfg.seed as u32
                };
                Cell::Scrambling(frames)
            } else {
                Cell::Scrambling(0)
            };
        }
    }

    // Emit one frame of visible text and tick countdowns down. Reaching the
    // target text exactly is terminal: the buffer is trimmed and the run
    // stops mutating until the next start().
    fn render(&mut self) {
        let mut output = String::with_capacity(self.cells.len());

        for i in 0..self.cells.len() {
            match self.cells[i] {
                Cell::Scrambling(n) if n > 0 => {
                    output.push(self.random_glyph());
                    if i <= self.revealed {
                        self.cells[i] = Cell::Scrambling(n - 1);
                    }
                }
                Cell::Literal(c) if i >= self.target.len() || i >= self.revealed => {
                    output.push(c);
                }
                Cell::Literal(c) if self.target[i] == c => {
                    output.push(c);
                }
                Cell::Scrambling(_) if i < self.target.len() => {
                    let c = self.target[i];
                    output.push(c);
                    self.cells[i] = Cell::Literal(c);
                }
                _ => {}
            }
        }

        let done = output == self.cfg.text;
        self.output = output;
        if done {
            self.cells.truncate(self.target.len());
            self.animating = false;
        }
        self.tick_count += 1;
    }

    #[inline]
    fn roll_chance(&mut self) -> bool {
        self.rng.range_inclusive(0, 10) as f64 >= (1.0 - self.cfg.chance) * 10.0
    }

    fn random_glyph(&mut self) -> char {
        let code = if self.cfg.range.len() == 2 {
            let (lo, hi) = (self.cfg.range[0], self.cfg.range[1]);
            self.rng.range_inclusive(lo, hi)
        } else {
            let i = self.rng.range_inclusive(0, self.cfg.range.len() as u32 - 1) as usize;
            self.cfg.range[i]
        };
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
