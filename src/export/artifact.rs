use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::color::model::Paint;
use crate::export::raster::{RasterFormat, Rasterizer, rasterize};
use crate::foundation::core::OutputSize;
use crate::foundation::error::WaveResult;

/// Downloadable output kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Vector markup.
    Svg,
    /// PNG bitmap.
    Png,
    /// JPEG bitmap.
    Jpeg,
}

impl ExportFormat {
    /// Fixed artifact file name.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Svg => "wave.svg",
            Self::Png => "wave.png",
            Self::Jpeg => "wave.jpg",
        }
    }

    /// MIME type of the artifact bytes.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Bitmap encoding, or `None` for vector output.
    pub fn raster(self) -> Option<RasterFormat> {
        match self {
            Self::Svg => None,
            Self::Png => Some(RasterFormat::Png),
            Self::Jpeg => Some(RasterFormat::Jpeg),
        }
    }
}

/// Finished export, ready to hand to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Output kind.
    pub format: ExportFormat,
    /// Encoded bytes (UTF-8 markup for SVG).
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// `wave.svg`, `wave.png` or `wave.jpg`.
    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    /// MIME type.
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }
}

/// Produce an artifact from finished SVG markup.
///
/// Raster failures abort the export; no partial artifact is returned.
pub fn export_markup<R: Rasterizer>(
    rasterizer: &R,
    markup: &str,
    size: OutputSize,
    background: Option<Paint>,
    format: ExportFormat,
) -> WaveResult<ExportArtifact> {
    let bytes = match format.raster() {
        None => markup.as_bytes().to_vec(),
        Some(raster) => rasterize(rasterizer, markup, size, background, raster).inspect_err(
            |err| tracing::warn!(%err, file = format.file_name(), "raster export failed"),
        )?,
    };
    Ok(ExportArtifact { format, bytes })
}

/// Destination for finished artifacts (the "download" step).
pub trait ArtifactSink {
    /// Persist or hand off `artifact`.
    fn deliver(&mut self, artifact: &ExportArtifact) -> WaveResult<()>;
}

/// Writes artifacts by file name into a directory.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Sink writing into `dir` (created on first delivery).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> WaveResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        let path = self.dir.join(artifact.file_name());
        std::fs::write(&path, &artifact.bytes)
            .with_context(|| format!("write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "wrote artifact");
        Ok(())
    }
}

/// Collects artifacts in memory for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    artifacts: Vec<ExportArtifact>,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifacts in delivery order.
    pub fn artifacts(&self) -> &[ExportArtifact] {
        &self.artifacts
    }
}

impl ArtifactSink for InMemorySink {
    fn deliver(&mut self, artifact: &ExportArtifact) -> WaveResult<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

/// Hand `artifact` to `sink`, swallowing failures. Returns whether delivery succeeded.
pub fn deliver_best_effort(sink: &mut dyn ArtifactSink, artifact: &ExportArtifact) -> bool {
    match sink.deliver(artifact) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(%err, file = artifact.file_name(), "artifact delivery failed");
            false
        }
    }
}

/// Host text clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents; `false` if the host refused or is unavailable.
    fn write_text(&mut self, text: &str) -> bool;
}

/// Host without clipboard access.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> bool {
        false
    }
}

/// Clipboard backed by a string, for tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    /// Last written text.
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> bool {
        self.contents = Some(text.to_owned());
        true
    }
}

/// Copy SVG markup; reports success, never fails.
pub fn copy_svg(clipboard: &mut dyn Clipboard, markup: &str) -> bool {
    let ok = clipboard.write_text(markup);
    if !ok {
        tracing::debug!("clipboard unavailable, copy skipped");
    }
    ok
}

#[cfg(test)]
#[path = "../../tests/unit/export/artifact.rs"]
mod tests;
