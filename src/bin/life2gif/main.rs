// life2gif - Render a Game of Life run to an animated GIF
//
// Offline counterpart of the live canvas: same rule, same seeding, same
// palette, so a baked article illustration matches the interactive one.
//
// Usage: cargo run --bin life2gif -- [--width N] [--height N] [--cell N]
//        [--seed N] [--prob F] [--interval MS] [--frames N] [--out FILE]

mod raster;

use std::fs::File;

use effects_engine::life::{LifeConfig, LifeGrid};
use image::Delay;
use image::Frame;
use image::codecs::gif::{GifEncoder, Repeat};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut cfg = LifeConfig {
        width: 120,
        height: 72,
        cell_size: 10,
        seed: 29,
        alive_prob: 0.3,
        step_interval_ms: 125.0,
    };
    let mut frames = 80usize;
    let mut out = String::from("life.gif");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => { cfg.width = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(cfg.width); i += 2; }
            "--height" => { cfg.height = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(cfg.height); i += 2; }
            "--cell" => { cfg.cell_size = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(cfg.cell_size); i += 2; }
            "--seed" => { cfg.seed = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(cfg.seed); i += 2; }
            "--prob" => { cfg.alive_prob = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(cfg.alive_prob); i += 2; }
            "--interval" => { cfg.step_interval_ms = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(cfg.step_interval_ms); i += 2; }
            "--frames" => { frames = args.get(i + 1).and_then(|s| s.parse().ok()).unwrap_or(frames); i += 2; }
            "--out" => { out = args.get(i + 1).cloned().unwrap_or(out); i += 2; }
            _ => i += 1,
        }
    }

    cfg.width = cfg.width.max(1);
    cfg.height = cfg.height.max(1);
    cfg.cell_size = cfg.cell_size.max(2);
    cfg.alive_prob = cfg.alive_prob.clamp(0.0, 1.0);

    println!(
        "Rendering {}x{} seed={} prob={} ({} frames)...",
        cfg.width, cfg.height, cfg.seed, cfg.alive_prob, frames
    );

    let delay = Delay::from_numer_denom_ms(cfg.step_interval_ms.max(1.0) as u32, 1);
    let mut grid = LifeGrid::new(cfg);

    let file = File::create(&out).expect("Failed to create output file");
    let mut encoder = GifEncoder::new(file);
    encoder
        .set_repeat(Repeat::Infinite)
        .expect("Failed to set GIF repeat");

    for n in 0..frames {
        let image = raster::rasterize(&grid);
        encoder
            .encode_frame(Frame::from_parts(image, 0, 0, delay))
            .expect("Failed to encode frame");
        grid.step();

        if (n + 1) % 20 == 0 {
            println!("  {}/{} frames", n + 1, frames);
        }
    }

    println!("Wrote {}", out);
}
