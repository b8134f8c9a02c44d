use std::f64::consts::TAU;

use crate::foundation::core::WavePoint;
use crate::wave::params::{Shape, WaveParams};

/// Sample intervals across the width for [`Shape::Smooth`] (65 points).
pub const SMOOTH_SEGMENTS: usize = 64;
/// Sample intervals across the width for [`Shape::Peaks`] (9 points).
pub const PEAK_SEGMENTS: usize = 8;

// (frequency in cycles per width, weight); weights sum to 1 so |offset| <= vertical_range.
const SMOOTH_LAYERS: [(f64, f64); 3] = [(1.2, 0.55), (2.6, 0.3), (5.3, 0.15)];

/// Stateless pseudo-random sequence: a pure function of seed and sample index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededRandom {
    seed: i64,
}

impl SeededRandom {
    /// Sequence for `seed`.
    pub fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Value in `[0, 1)` for sample `i`: `frac(sin(seed * 9973 + i * 4271) * 10000)`.
    pub fn at(self, i: usize) -> f64 {
        let v = ((self.seed as f64) * 9973.0 + (i as f64) * 4271.0).sin() * 10000.0;
        v - v.floor()
    }
}

/// Synthesize the silhouette for `params`, ordered left to right from `x = 0` to `x = width`.
#[tracing::instrument(level = "trace", skip_all, fields(seed = params.seed, shape = ?params.shape))]
pub fn generate_points(params: &WaveParams) -> Vec<WavePoint> {
    let rng = SeededRandom::new(params.seed);
    let range = params.vertical_range();

    match params.shape {
        Shape::Smooth => smooth_points(params, rng, range),
        Shape::Peaks => peak_points(params, rng, range),
    }
}

fn smooth_points(params: &WaveParams, rng: SeededRandom, range: f64) -> Vec<WavePoint> {
    let phases = [rng.at(0) * TAU, rng.at(1) * TAU, rng.at(2) * TAU];

    (0..=SMOOTH_SEGMENTS)
        .map(|i| {
            let t = i as f64 / SMOOTH_SEGMENTS as f64;
            let offset: f64 = SMOOTH_LAYERS
                .iter()
                .zip(phases)
                .map(|(&(freq, weight), phase)| weight * (t * TAU * freq + phase).sin())
                .sum();
            WavePoint::new(t * params.width, params.base_height + offset * range)
        })
        .collect()
}

fn peak_points(params: &WaveParams, rng: SeededRandom, range: f64) -> Vec<WavePoint> {
    (0..=PEAK_SEGMENTS)
        .map(|i| {
            let x = i as f64 / PEAK_SEGMENTS as f64 * params.width;
            let offset = if i == 0 || i == PEAK_SEGMENTS {
                0.0
            } else {
                // Odd samples rise (y grows downward), even samples dip.
                let sign = if i % 2 == 1 { -1.0 } else { 1.0 };
                sign * (0.4 + rng.at(i) * 0.6) * range
            };
            WavePoint::new(x, params.base_height + offset)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/wave/generate.rs"]
mod tests;
