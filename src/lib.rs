//! wavecraft synthesizes decorative wave silhouettes and exports them as SVG, PNG or JPEG.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `WaveParams + seed -> Vec<WavePoint>` (pure, bit-for-bit deterministic)
//! 2. **Path**: `points -> SVG path data` closed against the top or bottom canvas edge
//! 3. **Morph** (optional): ease the displayed points toward a new silhouette, one frame per tick
//! 4. **Export**: `path -> SVG document -> bitmap (PNG/JPEG)` through an injected [`Rasterizer`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Clamp, don't reject**: out-of-range numeric input is clamped; bad colors yield `None`.
//! - **One morph at a time**: starting a morph supersedes the one in flight.
//! - **Host-agnostic**: timestamps, rasterization, downloads and clipboard are all injected.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Morph engine, easing and frame clocks.
pub mod animation;
/// Color conversions and WCAG contrast.
pub mod color;
/// SVG/PNG/JPEG export.
pub mod export;
/// Editor session and config.
pub mod studio;
/// Point generation and path building.
pub mod wave;

pub use crate::foundation::core::{
    BezPath, DESIGN_HEIGHT, DESIGN_WIDTH, InputRange, OutputSize, Point, WavePoint,
};
pub use crate::foundation::error::{WaveError, WaveResult};

pub use crate::animation::clock::{FrameClock, StepClock, SystemClock};
pub use crate::animation::ease::Ease;
pub use crate::animation::morph::{
    MORPH_DURATION_MS, MorphEngine, MorphSession, MorphTick, interpolate_points,
};
pub use crate::color::contrast::{
    ContrastGrade, contrast_ratio, contrast_ratio_rgb, relative_luminance,
};
pub use crate::color::model::{
    HslColor, Paint, RgbColor, hex_to_hsl, hsl_to_hex, hsl_to_rgb, nudge_lightness, parse_hex,
    rgb_to_hex, rgb_to_hsl,
};
pub use crate::export::artifact::{
    ArtifactSink, Clipboard, DirectorySink, ExportArtifact, ExportFormat, InMemorySink,
    MemoryClipboard, NoClipboard, copy_svg, deliver_best_effort, export_markup,
};
pub use crate::export::raster::{
    PixmapSurface, RasterFormat, Rasterizer, ResvgRasterizer, Surface, backdrop_for, rasterize,
};
pub use crate::export::svg::svg_document;
pub use crate::studio::config::WaveConfig;
pub use crate::studio::session::WaveStudio;
pub use crate::wave::generate::{PEAK_SEGMENTS, SMOOTH_SEGMENTS, SeededRandom, generate_points};
pub use crate::wave::params::{Position, Shape, WaveParams, base_height_for};
pub use crate::wave::path::{PathFrame, build_bez_path, build_path};
