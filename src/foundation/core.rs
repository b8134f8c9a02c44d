pub use kurbo::{BezPath, Point};

/// One sample of a wave silhouette in canvas space (y grows downward).
pub type WavePoint = Point;

/// Logical design canvas width; every wave is synthesized in this space.
pub const DESIGN_WIDTH: f64 = 1440.0;
/// Logical design canvas height.
pub const DESIGN_HEIGHT: f64 = 320.0;

/// Closed numeric interval with a fallback for non-finite input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Value used when the input is NaN or infinite.
    pub fallback: f64,
}

impl InputRange {
    /// Wave body height in design pixels.
    pub const WAVE_HEIGHT: Self = Self::new(80.0, 320.0, 160.0);
    /// Wave intensity (amplitude multiplier).
    pub const INTENSITY: Self = Self::new(0.0, 1.0, 0.5);
    /// Exported output width in pixels.
    pub const OUTPUT_WIDTH: Self = Self::new(120.0, 8192.0, DESIGN_WIDTH);
    /// Exported output height in pixels.
    pub const OUTPUT_HEIGHT: Self = Self::new(80.0, 4096.0, DESIGN_HEIGHT);

    const fn new(min: f64, max: f64, fallback: f64) -> Self {
        Self { min, max, fallback }
    }

    /// Clamp `v` into `[min, max]`; non-finite values map to `fallback`.
    pub fn clamp(self, v: f64) -> f64 {
        if v.is_finite() {
            v.clamp(self.min, self.max)
        } else {
            self.fallback
        }
    }

    /// Clamp and round to a whole pixel count.
    pub fn clamp_px(self, v: f64) -> u32 {
        self.clamp(v).round() as u32
    }
}

/// Pixel dimensions of an exported artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl OutputSize {
    /// Build a size clamped to the exportable range.
    pub fn clamped(width: f64, height: f64) -> Self {
        Self {
            width: InputRange::OUTPUT_WIDTH.clamp_px(width),
            height: InputRange::OUTPUT_HEIGHT.clamp_px(height),
        }
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self {
            width: DESIGN_WIDTH as u32,
            height: DESIGN_HEIGHT as u32,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
