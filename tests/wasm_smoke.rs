#![cfg(target_arch = "wasm32")]

// Browser-side smoke test; run with `wasm-pack test --headless --chrome`.

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn version_reports_crate_version() {
    assert_eq!(effects_engine::version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn engines_run_without_a_dom_mount() {
    let mut engine = effects_engine::Scramble::new(effects_engine::ScrambleConfig::new("wasm"));
    engine.start();
    assert!(engine.is_animating());

    let mut grid = effects_engine::LifeGrid::new(effects_engine::LifeConfig::default());
    grid.step();
}
