use crate::foundation::core::{DESIGN_HEIGHT, InputRange};
use crate::foundation::error::{WaveError, WaveResult};

/// Canvas edge the filled wave region extends from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Region hangs from `y = 0`.
    Top,
    /// Region rises from `y = height`.
    #[default]
    Bottom,
}

/// Silhouette style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Layered sines rendered with quadratic smoothing.
    #[default]
    Smooth,
    /// Zigzag rendered with straight segments.
    Peaks,
}

/// Inputs to the seeded point generator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaveParams {
    /// Logical canvas width.
    pub width: f64,
    /// Logical canvas height.
    pub height: f64,
    /// Amplitude multiplier; clamped to `[0, 1]` before use.
    pub intensity: f64,
    /// Vertical anchor of the wave body.
    pub base_height: f64,
    /// Seed for the sample sequence.
    pub seed: i64,
    /// Anchor edge (consumed by the path builder).
    pub position: Position,
    /// Silhouette style.
    pub shape: Shape,
}

impl WaveParams {
    /// Reject degenerate canvases. Every other field is clamped rather than rejected.
    pub fn validate(&self) -> WaveResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(WaveError::validation("wave width must be > 0"));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(WaveError::validation("wave height must be > 0"));
        }
        Ok(())
    }

    /// Intensity after clamping into `[0, 1]`.
    pub fn clamped_intensity(&self) -> f64 {
        InputRange::INTENSITY.clamp(self.intensity)
    }

    /// Peak-to-baseline swing in canvas units.
    pub fn vertical_range(&self) -> f64 {
        self.height * 0.18 * (0.3 + self.clamped_intensity() * 1.7)
    }
}

/// Baseline for a wave body of `wave_height` anchored at `position` on the design canvas.
pub fn base_height_for(wave_height: f64, position: Position) -> f64 {
    let h = InputRange::WAVE_HEIGHT.clamp(wave_height);
    match position {
        Position::Bottom => DESIGN_HEIGHT - h,
        Position::Top => h,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/params.rs"]
mod tests;
