// grid.rs - Toroidal Game of Life core
//
// Flat row-major byte grid, double-buffered: the next generation is fully
// computed before the buffers swap, so counting never observes its own
// writes. Stepping is gated to a wall-clock interval; rendering cadence is
// the caller's business.

use std::mem;

use crate::rng::Lcg;

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    /// Grid width in cells (columns)
    pub width: u32,
    /// Grid height in cells (rows)
    pub height: u32,
    /// Logical cell size in layout units
    pub cell_size: u32,
    /// Seed for the deterministic initial generation
    pub seed: u32,
    /// Probability a cell starts alive
    pub alive_prob: f64,
    /// Minimum wall-clock time between generations
    pub step_interval_ms: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 60,
            cell_size: 8,
            seed: 29102006,
            alive_prob: 0.3,
            step_interval_ms: 125.0,
        }
    }
}

impl LifeConfig {
    // Generation state survives any change outside this key.
    fn seed_key(&self) -> (u32, u32, u32, u32, u64) {
        (
            self.width,
            self.height,
            self.cell_size,
            self.seed,
            self.alive_prob.to_bits(),
        )
    }
}

pub struct LifeGrid {
    cfg: LifeConfig,
    rows: usize,
    cols: usize,
    curr: Vec<u8>,
    next: Vec<u8>,
    last_step_ms: Option<f64>,
}

impl LifeGrid {
    pub fn new(cfg: LifeConfig) -> Self {
        let rows = cfg.height as usize;
        let cols = cfg.width as usize;
        let mut grid = Self {
            rows,
            cols,
            curr: vec![0; rows * cols],
            next: vec![0; rows * cols],
            last_step_ms: None,
            cfg,
        };
        grid.reseed();
        grid
    }

    /// Apply a new configuration. The generation state is preserved unless
    /// the seeding key (dimensions, cell size, seed, probability) changed.
    pub fn reconfigure(&mut self, cfg: LifeConfig) {
        let reseed = cfg.seed_key() != self.cfg.seed_key();
        self.cfg = cfg;
        if reseed {
            self.rows = self.cfg.height as usize;
            self.cols = self.cfg.width as usize;
            self.curr = vec![0; self.rows * self.cols];
            self.next = vec![0; self.rows * self.cols];
            self.reseed();
        }
    }

    fn reseed(&mut self) {
        let mut rng = Lcg::new(self.cfg.seed);
        for cell in &mut self.curr {
            *cell = (rng.next_f64() < self.cfg.alive_prob) as u8;
        }
        self.next.fill(0);
        self.last_step_ms = None;
    }

    /// Advance at most one generation, gated to the configured interval.
    /// The first call only arms the clock. Returns whether a step ran.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        match self.last_step_ms {
            None => {
                self.last_step_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms - last >= self.cfg.step_interval_ms => {
                self.last_step_ms = Some(now_ms);
                self.step();
                true
            }
            Some(_) => false,
        }
    }

    /// One generation of the toroidal Life rule
    pub fn step(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        for r in 0..rows {
            let up = (r + rows - 1) % rows;
            let dn = (r + 1) % rows;
            for c in 0..cols {
                let lf = (c + cols - 1) % cols;
                let rt = (c + 1) % cols;

                let n = self.curr[up * cols + lf]
                    + self.curr[up * cols + c]
                    + self.curr[up * cols + rt]
                    + self.curr[r * cols + lf]
                    + self.curr[r * cols + rt]
                    + self.curr[dn * cols + lf]
                    + self.curr[dn * cols + c]
                    + self.curr[dn * cols + rt];

                let alive = self.curr[r * cols + c] == 1;
                self.next[r * cols + c] = u8::from(if alive { n == 2 || n == 3 } else { n == 3 });
            }
        }
        mem::swap(&mut self.curr, &mut self.next);
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Current generation, row-major, 0/1 per cell
    pub fn cells(&self) -> &[u8] {
        &self.curr
    }

    pub fn config(&self) -> &LifeConfig {
        &self.cfg
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.rows && col < self.cols {
            self.curr[row * self.cols + col] = u8::from(alive);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(rows: u32, cols: u32) -> LifeGrid {
        let cfg = LifeConfig {
            width: cols,
            height: rows,
            alive_prob: 0.0,
            ..LifeConfig::default()
        };
        LifeGrid::new(cfg)
    }

    fn alive_at(grid: &LifeGrid, row: usize, col: usize) -> bool {
        grid.cells()[row * grid.cols() + col] == 1
    }

    // Place `n` live neighbors around (2, 2) on a 5x5 grid, far enough from
    // the edges that wraparound cannot interfere.
    fn with_neighbors(center_alive: bool, n: usize) -> LifeGrid {
        let mut grid = empty(5, 5);
        grid.set_cell(2, 2, center_alive);
        let ring = [
            (1, 1),
            (1, 2),
            (1, 3),
            (2, 1),
            (2, 3),
            (3, 1),
            (3, 2),
            (3, 3),
        ];
        for &(r, c) in ring.iter().take(n) {
            grid.set_cell(r, c, true);
        }
        grid
    }

    #[test]
    fn rule_table_is_exact() {
        for n in 0..=8 {
            let mut grid = with_neighbors(true, n);
            grid.step();
            assert_eq!(
                alive_at(&grid, 2, 2),
                n == 2 || n == 3,
                "live cell with {n} neighbors"
            );

            let mut grid = with_neighbors(false, n);
            grid.step();
            assert_eq!(alive_at(&grid, 2, 2), n == 3, "dead cell with {n} neighbors");
        }
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = empty(5, 5);
        for c in 1..=3 {
            grid.set_cell(2, c, true);
        }

        grid.step();
        for r in 1..=3 {
            assert!(alive_at(&grid, r, 2));
        }
        assert!(!alive_at(&grid, 2, 1));
        assert!(!alive_at(&grid, 2, 3));

        grid.step();
        for c in 1..=3 {
            assert!(alive_at(&grid, 2, c));
        }
    }

    #[test]
    fn neighbors_wrap_around_both_axes() {
        // A corner cell's neighborhood reaches the three opposite corners.
        let mut grid = empty(4, 4);
        grid.set_cell(0, 0, true);
        grid.set_cell(0, 3, true);
        grid.set_cell(3, 0, true);

        // (0,0) has exactly 2 live neighbors via wraparound: survives.
        // (3,3) sees all three across the corners: born.
        grid.step();
        assert!(alive_at(&grid, 0, 0));
        assert!(alive_at(&grid, 3, 3));
    }

    #[test]
    fn seeding_is_deterministic() {
        let cfg = LifeConfig {
            width: 120,
            height: 72,
            seed: 29,
            alive_prob: 0.3,
            ..LifeConfig::default()
        };
        let a = LifeGrid::new(cfg.clone());
        let b = LifeGrid::new(cfg);
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn reconfigure_preserves_state_when_key_is_unchanged() {
        let cfg = LifeConfig::default();
        let mut grid = LifeGrid::new(cfg.clone());
        grid.step();
        grid.step();
        let snapshot = grid.cells().to_vec();

        // Interval is not part of the seeding key.
        let mut slower = cfg.clone();
        slower.step_interval_ms = 500.0;
        grid.reconfigure(slower);
        assert_eq!(grid.cells(), &snapshot[..]);

        // A new seed re-rolls the generation.
        let mut reseeded = cfg;
        reseeded.seed = 1;
        grid.reconfigure(reseeded);
        assert_ne!(grid.cells(), &snapshot[..]);
    }

    #[test]
    fn advance_gates_stepping_to_the_interval() {
        let mut grid = LifeGrid::new(LifeConfig::default());

        // First call arms the clock without stepping.
        assert!(!grid.advance(1000.0));
        let initial = grid.cells().to_vec();

        assert!(!grid.advance(1100.0));
        assert_eq!(grid.cells(), &initial[..]);

        assert!(grid.advance(1125.0));
        assert!(!grid.advance(1130.0));
    }
}
