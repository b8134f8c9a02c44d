use super::*;
use crate::export::raster::ResvgRasterizer;
use crate::export::svg::svg_document;
use crate::foundation::error::WaveError;

fn markup() -> String {
    svg_document("M0,320 L0,100 L1440,100 L1440,320 Z", "#0ea5e9", OutputSize::default())
}

#[test]
fn names_and_mime_types() {
    assert_eq!(ExportFormat::Svg.file_name(), "wave.svg");
    assert_eq!(ExportFormat::Png.file_name(), "wave.png");
    assert_eq!(ExportFormat::Jpeg.file_name(), "wave.jpg");
    assert_eq!(ExportFormat::Jpeg.mime(), "image/jpeg");
    assert_eq!(ExportFormat::Svg.raster(), None);
}

#[test]
fn svg_export_is_the_markup() {
    let doc = markup();
    let a = export_markup(
        &ResvgRasterizer::new(),
        &doc,
        OutputSize::default(),
        None,
        ExportFormat::Svg,
    )
    .unwrap();
    assert_eq!(a.bytes, doc.as_bytes());
    assert_eq!(a.mime(), "image/svg+xml");
}

#[test]
fn png_export_is_png() {
    let a = export_markup(
        &ResvgRasterizer::new(),
        &markup(),
        OutputSize::default(),
        Some(Paint::Transparent),
        ExportFormat::Png,
    )
    .unwrap();
    assert_eq!(image::guess_format(&a.bytes).unwrap(), image::ImageFormat::Png);
}

#[test]
fn failed_raster_export_yields_no_artifact() {
    let mut sink = InMemorySink::new();
    let result = export_markup(
        &ResvgRasterizer::new(),
        "not svg",
        OutputSize::default(),
        None,
        ExportFormat::Png,
    );
    assert!(result.is_err());
    if let Ok(a) = result {
        sink.deliver(&a).unwrap();
    }
    assert!(sink.artifacts().is_empty());
}

struct BrokenSink;

impl ArtifactSink for BrokenSink {
    fn deliver(&mut self, _artifact: &ExportArtifact) -> WaveResult<()> {
        Err(WaveError::export("download unavailable"))
    }
}

#[test]
fn delivery_failures_are_swallowed() {
    let a = ExportArtifact {
        format: ExportFormat::Svg,
        bytes: b"<svg/>".to_vec(),
    };
    assert!(!deliver_best_effort(&mut BrokenSink, &a));

    let mut sink = InMemorySink::new();
    assert!(deliver_best_effort(&mut sink, &a));
    assert_eq!(sink.artifacts(), &[a]);
}

#[test]
fn directory_sink_writes_by_file_name() {
    let dir = std::path::PathBuf::from("target").join("artifact_sink_test");
    let _ = std::fs::remove_dir_all(&dir);
    let mut sink = DirectorySink::new(&dir);
    let a = ExportArtifact {
        format: ExportFormat::Svg,
        bytes: markup().into_bytes(),
    };
    sink.deliver(&a).unwrap();
    assert_eq!(std::fs::read(dir.join("wave.svg")).unwrap(), a.bytes);
}

#[test]
fn clipboard_reports_without_failing() {
    assert!(!copy_svg(&mut NoClipboard, "<svg/>"));

    let mut clip = MemoryClipboard::default();
    assert!(copy_svg(&mut clip, "<svg/>"));
    assert_eq!(clip.contents.as_deref(), Some("<svg/>"));
}
