// raster.rs - Rasterize one generation to RGBA
//
// Same layout rules as the canvas painter: one-pixel grid separators and
// live cells inset by one pixel so the lines stay visible.

use effects_engine::life::{Color, LifeGrid, PAPER};
use image::{Rgba, RgbaImage};

pub fn rasterize(grid: &LifeGrid) -> RgbaImage {
    let cell = grid.config().cell_size;
    let cols = grid.cols() as u32;
    let rows = grid.rows() as u32;
    let w = cols * cell + 1;
    let h = rows * cell + 1;

    let bg = rgba(PAPER.background);
    let ink = rgba(PAPER.ink);
    let line = rgba(PAPER.grid);

    let mut img = RgbaImage::from_pixel(w, h, bg);

    for c in 0..=cols {
        let x = (c * cell).min(w - 1);
        for y in 0..h {
            img.put_pixel(x, y, line);
        }
    }
    for r in 0..=rows {
        let y = (r * cell).min(h - 1);
        for x in 0..w {
            img.put_pixel(x, y, line);
        }
    }

    let cells = grid.cells();
    for r in 0..rows {
        for c in 0..cols {
            if cells[(r * cols + c) as usize] == 0 {
                continue;
            }
            let x0 = c * cell + 1;
            let y0 = r * cell + 1;
            for y in y0..y0 + cell - 1 {
                for x in x0..x0 + cell - 1 {
                    img.put_pixel(x, y, ink);
                }
            }
        }
    }

    img
}

fn rgba(c: Color) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}
