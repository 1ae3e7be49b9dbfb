// End-to-end scramble runs with the configuration the site ships.

use effects_engine::{Scramble, ScrambleConfig};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn drive(engine: &mut Scramble, max_frames: usize) -> usize {
    for i in 1..=max_frames {
        if !engine.frame(i as f64 * FRAME_MS) {
            return i;
        }
    }
    max_frames
}

#[test]
fn default_configuration_settles_on_the_site_title() {
    // speed 0.75, step 1, chance 1, scramble 10: the defaults.
    let mut engine = Scramble::new(ScrambleConfig::new("Pranshu Rao"));
    engine.start();

    let frames = drive(&mut engine, 100_000);
    assert!(frames < 100_000, "animation never settled");
    assert_eq!(engine.output(), "Pranshu Rao");
    assert!(!engine.is_animating());

    // Stable thereafter.
    for i in 0..600 {
        assert!(!engine.frame((frames + i) as f64 * FRAME_MS));
        assert_eq!(engine.output(), "Pranshu Rao");
    }
}

#[test]
fn every_configuration_variant_still_converges() {
    let texts = ["[pranshurao.com]", "Currently in: Berkeley, CA", "[linkedin]"];
    for text in texts {
        for (chance, scramble, step) in [(1.0, 10, 1), (0.5, 4, 2), (0.0, 10, 3)] {
            let mut cfg = ScrambleConfig::new(text);
            cfg.chance = chance;
            cfg.scramble = scramble;
            cfg.step = step;
            let mut engine = Scramble::new(cfg);
            engine.start();

            let frames = drive(&mut engine, 100_000);
            assert!(frames < 100_000, "{text} with chance {chance} never settled");
            assert_eq!(engine.output(), text);
        }
    }
}

#[test]
fn overdrive_run_converges_too() {
    let mut cfg = ScrambleConfig::new("overdriven headline");
    cfg.overdrive = Some(u32::from('_'));
    let mut engine = Scramble::new(cfg);
    engine.start();

    let frames = drive(&mut engine, 100_000);
    assert!(frames < 100_000);
    assert_eq!(engine.output(), "overdriven headline");
}

#[test]
fn restart_mid_run_settles_cleanly() {
    let mut engine = Scramble::new(ScrambleConfig::new("interrupted reveal"));
    engine.start();
    drive(&mut engine, 20);
    assert!(engine.is_animating());

    engine.start();
    assert_eq!(engine.revealed(), 0);
    assert_eq!(engine.tick_count(), 0);

    let frames = drive(&mut engine, 100_000);
    assert!(frames < 100_000);
    assert_eq!(engine.output(), "interrupted reveal");
}

#[test]
fn spaces_always_render_as_spaces() {
    // Noise glyphs come from a range that contains no space, so any space
    // in the output must be the literal character passing through.
    let mut cfg = ScrambleConfig::new("one two three");
    cfg.range = vec![65, 90];
    let mut engine = Scramble::new(cfg);
    engine.start();

    for i in 1..100_000u64 {
        let live = engine.frame(i as f64 * FRAME_MS);
        for ch in engine.output().chars() {
            assert!(
                ch.is_ascii_uppercase() || "one two three".contains(ch),
                "unexpected glyph {ch:?}"
            );
        }
        if !live {
            break;
        }
    }
    assert_eq!(engine.output(), "one two three");
}
