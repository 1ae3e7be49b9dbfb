// config.rs - Scramble engine configuration
//
// Defaults mirror the props the site mounts the component with. Note that
// `seed` is the number of scramble attempts per tick, not a PRNG seed.

/// Filler code point used when overdrive is enabled without an explicit glyph
pub const OVERDRIVE_FILLER: u32 = 95; // '_'

#[derive(Clone, Debug)]
pub struct ScrambleConfig {
    /// Target text the run converges to
    pub text: String,
    /// Animation speed multiplier; 0 disables the animation outright
    pub speed: f64,
    /// Run the update phases every Nth rendered frame (clamped to >= 1)
    pub tick: u32,
    /// Positions advanced per update
    pub step: usize,
    /// Probability that a newly passed character scrambles instead of
    /// resolving immediately
    pub chance: f64,
    /// Scramble attempts per tick at positions beyond the reveal cursor
    pub seed: usize,
    /// Noise frames a scrambling character shows before it resolves
    pub scramble: u32,
    /// Characters that always render as themselves
    pub ignore: Vec<char>,
    /// Code points noise glyphs are drawn from: an inclusive [lo, hi] pair,
    /// or an explicit list when longer
    pub range: Vec<u32>,
    /// Force-resolve filler code point; None leaves overdrive off
    pub overdrive: Option<u32>,
    /// Keep the previous run's tail in the buffer between runs
    pub overflow: bool,
    /// Animate immediately on creation instead of showing settled text
    pub play_on_mount: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            speed: 0.75,
            tick: 1,
            step: 1,
            chance: 1.0,
            seed: 15,
            scramble: 10,
            ignore: vec![' '],
            range: vec![65, 125],
            overdrive: None,
            overflow: true,
            play_on_mount: true,
        }
    }
}

impl ScrambleConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
