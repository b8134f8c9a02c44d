use rand::Rng as _;

use crate::animation::clock::FrameClock;
use crate::animation::morph::{MorphEngine, MorphTick};
use crate::color::contrast::ContrastGrade;
use crate::color::model::nudge_lightness;
use crate::export::artifact::{Clipboard, ExportArtifact, ExportFormat, copy_svg, export_markup};
use crate::export::raster::Rasterizer;
use crate::export::svg::svg_document;
use crate::foundation::core::{DESIGN_HEIGHT, DESIGN_WIDTH, InputRange, OutputSize, WavePoint};
use crate::foundation::error::WaveResult;
use crate::studio::config::WaveConfig;
use crate::wave::generate::generate_points;
use crate::wave::params::{Position, Shape};

const FILL_FALLBACK: &str = "#4f46e5";
const BACKGROUND_FALLBACK: &str = "#ffffff";

/// Interactive wave editor state: committed config, live morph, one-level undo.
///
/// Geometry setters (height, intensity, seed, position, shape) start a morph from whatever is on
/// screen and only commit to [`config`](Self::config) once that morph lands. Color and output-size
/// setters apply immediately. The latest request always wins; nothing is queued.
#[derive(Debug)]
pub struct WaveStudio {
    committed: WaveConfig,
    requested: WaveConfig,
    snapshot: Option<WaveConfig>,
    engine: MorphEngine<WaveConfig>,
}

impl WaveStudio {
    /// Studio showing `config` without animating.
    pub fn new(config: WaveConfig) -> Self {
        let config = config.sanitized();
        let points = generate_points(&config.wave_params());
        let engine = MorphEngine::new(
            DESIGN_WIDTH,
            DESIGN_HEIGHT,
            points,
            config.position,
            config.shape,
        );
        Self {
            committed: config.clone(),
            requested: config,
            snapshot: None,
            engine,
        }
    }

    /// Config whose geometry is fully on screen.
    pub fn config(&self) -> &WaveConfig {
        &self.committed
    }

    /// Latest requested config, including geometry still morphing in.
    pub fn requested(&self) -> &WaveConfig {
        &self.requested
    }

    /// Snapshot available to [`restore_snapshot`](Self::restore_snapshot).
    pub fn snapshot(&self) -> Option<&WaveConfig> {
        self.snapshot.as_ref()
    }

    /// Underlying morph engine.
    pub fn engine(&self) -> &MorphEngine<WaveConfig> {
        &self.engine
    }

    /// `true` while a geometry change is animating.
    pub fn is_morphing(&self) -> bool {
        self.engine.is_morphing()
    }

    /// Path data currently displayed.
    pub fn current_path(&self) -> &str {
        self.engine.current_path()
    }

    /// Points currently displayed.
    pub fn displayed_points(&self) -> &[WavePoint] {
        self.engine.displayed_points()
    }

    /// Set the wave body height (clamped to 80..=320).
    pub fn set_height(&mut self, height: f64) {
        let next = WaveConfig {
            height: InputRange::WAVE_HEIGHT.clamp(height),
            ..self.requested.clone()
        };
        self.request_geometry(next);
    }

    /// Set intensity (clamped to 0..=1).
    pub fn set_intensity(&mut self, intensity: f64) {
        let next = WaveConfig {
            intensity: InputRange::INTENSITY.clamp(intensity),
            ..self.requested.clone()
        };
        self.request_geometry(next);
    }

    /// Switch the anchor edge.
    pub fn set_position(&mut self, position: Position) {
        let next = WaveConfig {
            position,
            ..self.requested.clone()
        };
        self.request_geometry(next);
    }

    /// Switch the silhouette style.
    pub fn set_shape(&mut self, shape: Shape) {
        let next = WaveConfig {
            shape,
            ..self.requested.clone()
        };
        self.request_geometry(next);
    }

    /// Snapshot, then morph to a fresh random seed. Returns the new seed.
    pub fn randomize(&mut self) -> i64 {
        let seed = rand::rng().random_range(1..=999_999);
        self.randomize_with(seed);
        seed
    }

    /// Snapshot, then morph to `seed`.
    pub fn randomize_with(&mut self, seed: i64) {
        self.save_snapshot();
        let next = WaveConfig {
            seed,
            ..self.requested.clone()
        };
        self.request_geometry(next);
    }

    /// Set the fill text as written (hex or `transparent`).
    pub fn set_fill(&mut self, fill: impl Into<String>) {
        let fill = fill.into();
        self.requested.fill.clone_from(&fill);
        self.committed.fill = fill;
    }

    /// Set the background text as written (hex or `transparent`).
    pub fn set_background(&mut self, background: impl Into<String>) {
        let background = background.into();
        self.requested.background.clone_from(&background);
        self.committed.background = background;
    }

    /// Step fill lightness by `delta_percent` points (arrow-key input).
    pub fn nudge_fill(&mut self, delta_percent: f64) {
        let next = nudge_lightness(&self.requested.fill, FILL_FALLBACK, delta_percent);
        self.set_fill(next);
    }

    /// Step background lightness by `delta_percent` points.
    pub fn nudge_background(&mut self, delta_percent: f64) {
        let next = nudge_lightness(
            &self.requested.background,
            BACKGROUND_FALLBACK,
            delta_percent,
        );
        self.set_background(next);
    }

    /// Set export dimensions (clamped to 120..=8192 x 80..=4096).
    pub fn set_output_size(&mut self, width: f64, height: f64) {
        let size = OutputSize::clamped(width, height);
        for cfg in [&mut self.requested, &mut self.committed] {
            cfg.output_width = size.width;
            cfg.output_height = size.height;
        }
    }

    /// Capture the latest requested config, replacing any earlier snapshot.
    pub fn save_snapshot(&mut self) {
        self.snapshot = Some(self.requested.clone());
    }

    /// Consume the snapshot and return to it. Returns `false` when there is none.
    pub fn restore_snapshot(&mut self) -> bool {
        let Some(prev) = self.snapshot.take() else {
            return false;
        };
        self.set_fill(prev.fill.clone());
        self.set_background(prev.background.clone());
        self.set_output_size(f64::from(prev.output_width), f64::from(prev.output_height));
        self.request_geometry(prev);
        true
    }

    /// Advance any in-flight morph to `now_ms`; commits geometry when it lands.
    pub fn tick(&mut self, now_ms: f64) -> MorphTick<WaveConfig> {
        match self.engine.tick(now_ms) {
            MorphTick::Idle => MorphTick::Idle,
            MorphTick::Frame { progress } => MorphTick::Frame { progress },
            MorphTick::Completed { commit } => {
                self.committed.seed = commit.seed;
                self.committed.position = commit.position;
                self.committed.shape = commit.shape;
                self.committed.height = commit.height;
                self.committed.intensity = commit.intensity;
                MorphTick::Completed {
                    commit: self.committed.clone(),
                }
            }
        }
    }

    /// Tick with `clock` until the in-flight morph lands or `max_frames` frames are rendered,
    /// calling `on_frame` after each one. Returns the number of frames rendered.
    pub fn play(
        &mut self,
        clock: &mut dyn FrameClock,
        max_frames: usize,
        mut on_frame: impl FnMut(usize, &Self) -> WaveResult<()>,
    ) -> WaveResult<usize> {
        let mut rendered = 0;
        while rendered < max_frames {
            let done = match self.tick(clock.now_ms()) {
                MorphTick::Idle => break,
                MorphTick::Frame { .. } => false,
                MorphTick::Completed { .. } => true,
            };
            on_frame(rendered, self)?;
            rendered += 1;
            if done {
                break;
            }
        }
        Ok(rendered)
    }

    /// SVG document for what is on screen, at the configured output size.
    pub fn svg_markup(&self) -> String {
        svg_document(
            self.current_path(),
            &self.requested.fill,
            self.requested.output_size(),
        )
    }

    /// Export the on-screen wave as `format`.
    pub fn export<R: Rasterizer>(
        &self,
        rasterizer: &R,
        format: ExportFormat,
    ) -> WaveResult<ExportArtifact> {
        export_markup(
            rasterizer,
            &self.svg_markup(),
            self.requested.output_size(),
            self.requested.background_paint(),
            format,
        )
    }

    /// Copy the SVG markup; `false` when the clipboard is unavailable.
    pub fn copy_svg(&self, clipboard: &mut dyn Clipboard) -> bool {
        copy_svg(clipboard, &self.svg_markup())
    }

    /// Fill-on-background contrast, indeterminate unless both are opaque hex colors.
    pub fn fill_contrast(&self) -> Option<ContrastGrade> {
        ContrastGrade::grade(&self.requested.fill, &self.requested.background)
    }

    fn request_geometry(&mut self, next: WaveConfig) {
        let changed = self.requested.geometry_differs(&next);
        self.requested = next;
        if !changed {
            return;
        }
        let points = generate_points(&self.requested.wave_params());
        self.engine.start(
            points,
            self.requested.position,
            self.requested.shape,
            self.requested.clone(),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/session.rs"]
mod tests;
