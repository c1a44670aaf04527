//! Error-magnitude color ramp.
//!
//! Scalar CE90/LE90 values are binned onto a 100-shade plasma ramp to color
//! rendered geometry by positional uncertainty. The ramp is built by
//! piecewise-linear interpolation between fixed plasma control points;
//! components are normalized to [0, 1] RGB.

/// Plasma colormap control points: position in [0, 1] and 8-bit RGB.
const PLASMA_STOPS: [(f64, [f64; 3]); 9] = [
    (0.0, [13.0, 8.0, 135.0]),
    (0.13, [84.0, 2.0, 163.0]),
    (0.25, [139.0, 10.0, 165.0]),
    (0.38, [185.0, 50.0, 137.0]),
    (0.5, [219.0, 92.0, 104.0]),
    (0.63, [244.0, 136.0, 73.0]),
    (0.75, [254.0, 188.0, 43.0]),
    (0.88, [240.0, 209.0, 33.0]),
    (1.0, [240.0, 249.0, 33.0]),
];

/// Number of discrete shades in the ramp.
pub const SHADE_COUNT: usize = 100;

/// Default scalar range covered by the ramp, in meters.
pub const DEFAULT_ERROR_RANGE: f64 = 2.5;

/// Builds the full ramp, `SHADE_COUNT` normalized RGB triples from dark
/// purple to yellow.
pub fn plasma_ramp() -> Vec<[f32; 3]> {
    (0..SHADE_COUNT)
        .map(|i| sample_stops(i as f64 / (SHADE_COUNT - 1) as f64))
        .collect()
}

/// Maps an error magnitude to its shade index: `floor(value / range *
/// SHADE_COUNT)`, clamped to `[0, SHADE_COUNT - 1]`. Values at or beyond
/// `range` take the last shade; a non-finite value takes the first.
pub fn shade_index(value: f64, range: f64) -> usize {
    let idx = (value / range) * SHADE_COUNT as f64;
    idx.floor().clamp(0.0, (SHADE_COUNT - 1) as f64) as usize
}

/// Color for an error magnitude against the given range.
pub fn color_for_error(value: f64, range: f64) -> [f32; 3] {
    let idx = shade_index(value, range);
    sample_stops(idx as f64 / (SHADE_COUNT - 1) as f64)
}

fn sample_stops(t: f64) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    for pair in PLASMA_STOPS.windows(2) {
        let (t0, lo) = pair[0];
        let (t1, hi) = pair[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return [
                lerp_channel(lo[0], hi[0], f),
                lerp_channel(lo[1], hi[1], f),
                lerp_channel(lo[2], hi[2], f),
            ];
        }
    }
    let (_, last) = PLASMA_STOPS[PLASMA_STOPS.len() - 1];
    [
        (last[0] / 255.0) as f32,
        (last[1] / 255.0) as f32,
        (last[2] / 255.0) as f32,
    ]
}

#[inline]
fn lerp_channel(a: f64, b: f64, f: f64) -> f32 {
    ((a + (b - a) * f) / 255.0) as f32
}
