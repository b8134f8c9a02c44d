use std::path::Path;

use anyhow::Context as _;

use crate::color::model::Paint;
use crate::foundation::core::{DESIGN_HEIGHT, DESIGN_WIDTH, InputRange, OutputSize};
use crate::foundation::error::{WaveError, WaveResult};
use crate::wave::params::{Position, Shape, WaveParams, base_height_for};

/// Every user-chosen input at one point in time.
///
/// Unknown-but-valid JSON is tolerated: missing fields take their defaults, numeric fields are
/// clamped by [`sanitized`](Self::sanitized) rather than rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveConfig {
    /// Seed for the sample sequence.
    pub seed: i64,
    /// Anchor edge.
    pub position: Position,
    /// Silhouette style.
    pub shape: Shape,
    /// Wave body height in design pixels (80..=320).
    pub height: f64,
    /// Amplitude (0..=1).
    pub intensity: f64,
    /// Fill as written by the user: hex or `transparent`.
    pub fill: String,
    /// Background as written by the user: hex or `transparent`.
    pub background: String,
    /// Exported width in pixels (120..=8192).
    #[serde(deserialize_with = "output_width_px")]
    pub output_width: u32,
    /// Exported height in pixels (80..=4096).
    #[serde(deserialize_with = "output_height_px")]
    pub output_height: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            position: Position::Bottom,
            shape: Shape::Smooth,
            height: InputRange::WAVE_HEIGHT.fallback,
            intensity: InputRange::INTENSITY.fallback,
            fill: "#4f46e5".to_owned(),
            background: Paint::TRANSPARENT.to_owned(),
            output_width: DESIGN_WIDTH as u32,
            output_height: DESIGN_HEIGHT as u32,
        }
    }
}

impl WaveConfig {
    /// Parse JSON and clamp every numeric field.
    pub fn from_json_str(s: &str) -> WaveResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| WaveError::serde(e.to_string()))?;
        Ok(cfg.sanitized())
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> WaveResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Pretty JSON for saving.
    pub fn to_json_pretty(&self) -> WaveResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| WaveError::serde(e.to_string()))
    }

    /// Copy with height, intensity and output size clamped into their documented ranges.
    pub fn sanitized(mut self) -> Self {
        self.height = InputRange::WAVE_HEIGHT.clamp(self.height);
        self.intensity = InputRange::INTENSITY.clamp(self.intensity);
        let size = OutputSize::clamped(
            f64::from(self.output_width),
            f64::from(self.output_height),
        );
        self.output_width = size.width;
        self.output_height = size.height;
        self
    }

    /// Export dimensions.
    pub fn output_size(&self) -> OutputSize {
        OutputSize::clamped(f64::from(self.output_width), f64::from(self.output_height))
    }

    /// Generator inputs on the design canvas.
    pub fn wave_params(&self) -> WaveParams {
        WaveParams {
            width: DESIGN_WIDTH,
            height: DESIGN_HEIGHT,
            intensity: self.intensity,
            base_height: base_height_for(self.height, self.position),
            seed: self.seed,
            position: self.position,
            shape: self.shape,
        }
    }

    /// `true` when `other` would generate a different silhouette or anchor.
    pub fn geometry_differs(&self, other: &Self) -> bool {
        self.seed != other.seed
            || self.position != other.position
            || self.shape != other.shape
            || self.height != other.height
            || self.intensity != other.intensity
    }

    /// Parsed background, `None` if it is neither hex nor `transparent`.
    pub fn background_paint(&self) -> Option<Paint> {
        Paint::parse(&self.background)
    }
}

// Any JSON number is accepted for output dimensions and clamped into range.
fn output_width_px<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let v = <f64 as serde::Deserialize>::deserialize(d)?;
    Ok(InputRange::OUTPUT_WIDTH.clamp_px(v))
}

fn output_height_px<'de, D: serde::Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let v = <f64 as serde::Deserialize>::deserialize(d)?;
    Ok(InputRange::OUTPUT_HEIGHT.clamp_px(v))
}

#[cfg(test)]
#[path = "../../tests/unit/studio/config.rs"]
mod tests;
