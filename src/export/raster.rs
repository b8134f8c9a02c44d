use std::io::Cursor;

use anyhow::Context as _;
use resvg::tiny_skia;

use crate::color::model::{Paint, RgbColor};
use crate::foundation::core::OutputSize;
use crate::foundation::error::{WaveError, WaveResult};

/// Largest surface side the raster pipeline will allocate.
pub const MAX_SURFACE_DIM: u32 = 16_384;

/// Bitmap encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterFormat {
    /// Lossless, keeps alpha.
    Png,
    /// Lossy, opaque only.
    Jpeg,
}

impl RasterFormat {
    /// Whether the encoding can carry an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Png)
    }
}

/// Color to fill under the wave before encoding, or `None` to keep alpha.
///
/// JPEG has no alpha: it always gets a backdrop, the background color or white when the
/// background is transparent. PNG gets one only when the background is an actual color.
/// A background that failed to parse counts as transparent.
pub fn backdrop_for(format: RasterFormat, background: Option<Paint>) -> Option<RgbColor> {
    let color = background.and_then(Paint::color);
    match format {
        RasterFormat::Jpeg => Some(color.unwrap_or(RgbColor::WHITE)),
        RasterFormat::Png => color,
    }
}

/// Host graphics binding that turns SVG markup into bitmap surfaces.
pub trait Rasterizer {
    /// Surface type produced by [`decode`](Self::decode).
    type Surface: Surface;

    /// Decode `markup` and draw it onto a transparent surface of exactly `size` pixels.
    fn decode(&self, markup: &str, size: OutputSize) -> WaveResult<Self::Surface>;
}

/// A decoded, drawn bitmap awaiting compositing and encoding.
pub trait Surface {
    /// Pixel dimensions.
    fn size(&self) -> OutputSize;

    /// Put an opaque `color` underneath everything drawn so far.
    fn composite_background(&mut self, color: RgbColor);

    /// Encode to `format`. Non-opaque pixels flatten onto black for JPEG.
    fn encode(&self, format: RasterFormat) -> WaveResult<Vec<u8>>;
}

/// Decode, composite per [`backdrop_for`], and encode.
#[tracing::instrument(level = "debug", skip(rasterizer, markup), fields(bytes = markup.len()))]
pub fn rasterize<R: Rasterizer>(
    rasterizer: &R,
    markup: &str,
    size: OutputSize,
    background: Option<Paint>,
    format: RasterFormat,
) -> WaveResult<Vec<u8>> {
    let mut surface = rasterizer.decode(markup, size)?;
    if let Some(color) = backdrop_for(format, background) {
        surface.composite_background(color);
    }
    surface.encode(format)
}

/// Software rasterizer backed by `usvg` + `resvg` (tiny-skia) and the `image` encoders.
#[derive(Clone, Debug)]
pub struct ResvgRasterizer {
    jpeg_quality: u8,
}

impl ResvgRasterizer {
    /// Rasterizer with JPEG quality 92.
    pub fn new() -> Self {
        Self { jpeg_quality: 92 }
    }

    /// Override JPEG quality (clamped to `1..=100`).
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ResvgRasterizer {
    type Surface = PixmapSurface;

    fn decode(&self, markup: &str, size: OutputSize) -> WaveResult<PixmapSurface> {
        if size.width > MAX_SURFACE_DIM || size.height > MAX_SURFACE_DIM {
            return Err(WaveError::export(format!(
                "surface too large: {}x{} (max {MAX_SURFACE_DIM}x{MAX_SURFACE_DIM})",
                size.width, size.height
            )));
        }

        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_str(markup, &opts).context("parse svg markup")?;

        let mut pixmap = tiny_skia::Pixmap::new(size.width, size.height)
            .ok_or_else(|| WaveError::export("failed to allocate raster surface"))?;

        let sx = (size.width as f32) / tree.size().width();
        let sy = (size.height as f32) / tree.size().height();
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        Ok(PixmapSurface {
            pixmap,
            jpeg_quality: self.jpeg_quality,
        })
    }
}

/// Premultiplied RGBA surface produced by [`ResvgRasterizer`].
#[derive(Clone, Debug)]
pub struct PixmapSurface {
    pixmap: tiny_skia::Pixmap,
    jpeg_quality: u8,
}

impl PixmapSurface {
    /// Straight-alpha RGBA8 pixels, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    fn to_rgb8_over_black(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 3);
        for px in self.pixmap.pixels() {
            out.extend_from_slice(&[px.red(), px.green(), px.blue()]);
        }
        out
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> OutputSize {
        OutputSize {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    fn composite_background(&mut self, color: RgbColor) {
        let Some(mut backdrop) = tiny_skia::Pixmap::new(self.pixmap.width(), self.pixmap.height())
        else {
            return;
        };
        backdrop.fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
        backdrop.draw_pixmap(
            0,
            0,
            self.pixmap.as_ref(),
            &tiny_skia::PixmapPaint::default(),
            tiny_skia::Transform::identity(),
            None,
        );
        self.pixmap = backdrop;
    }

    fn encode(&self, format: RasterFormat) -> WaveResult<Vec<u8>> {
        let (w, h) = (self.pixmap.width(), self.pixmap.height());
        let mut buf = Vec::new();
        match format {
            RasterFormat::Png => {
                let img = image::RgbaImage::from_raw(w, h, self.to_rgba8())
                    .ok_or_else(|| WaveError::export("png buffer size mismatch"))?;
                img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
                    .context("encode png")?;
            }
            RasterFormat::Jpeg => {
                let img = image::RgbImage::from_raw(w, h, self.to_rgb8_over_black())
                    .ok_or_else(|| WaveError::export("jpeg buffer size mismatch"))?;
                let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(
                    &mut buf,
                    self.jpeg_quality,
                );
                encoder.encode_image(&img).context("encode jpeg")?;
            }
        }
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
