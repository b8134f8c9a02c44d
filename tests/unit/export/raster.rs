use super::*;
use crate::export::svg::svg_document;

const LOWER_HALF: &str = "M0,320 L0,160 L1440,160 L1440,320 Z";

fn doc(fill: &str, size: OutputSize) -> String {
    svg_document(LOWER_HALF, fill, size)
}

fn small() -> OutputSize {
    OutputSize {
        width: 144,
        height: 80,
    }
}

fn decode_rgba(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).unwrap().to_rgba8()
}

fn close(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 8
}

#[test]
fn backdrop_rules() {
    let blue = Paint::Color(RgbColor::new(0, 0, 255));
    assert_eq!(
        backdrop_for(RasterFormat::Jpeg, Some(Paint::Transparent)),
        Some(RgbColor::WHITE)
    );
    assert_eq!(
        backdrop_for(RasterFormat::Jpeg, Some(blue)),
        Some(RgbColor::new(0, 0, 255))
    );
    assert_eq!(backdrop_for(RasterFormat::Jpeg, None), Some(RgbColor::WHITE));
    assert_eq!(backdrop_for(RasterFormat::Png, Some(Paint::Transparent)), None);
    assert_eq!(
        backdrop_for(RasterFormat::Png, Some(blue)),
        Some(RgbColor::new(0, 0, 255))
    );
    assert_eq!(backdrop_for(RasterFormat::Png, None), None);
}

#[test]
fn transparent_png_keeps_alpha() {
    let r = ResvgRasterizer::new();
    let bytes = rasterize(
        &r,
        &doc("#ff0000", small()),
        small(),
        Some(Paint::Transparent),
        RasterFormat::Png,
    )
    .unwrap();
    let img = decode_rgba(&bytes);
    assert_eq!(img.dimensions(), (144, 80));
    assert_eq!(img.get_pixel(72, 10).0[3], 0);
    assert_eq!(img.get_pixel(72, 70).0, [255, 0, 0, 255]);
}

#[test]
fn colored_png_background_is_filled() {
    let r = ResvgRasterizer::new();
    let bg = Paint::Color(RgbColor::new(0, 0, 255));
    let bytes = rasterize(
        &r,
        &doc("#ff0000", small()),
        small(),
        Some(bg),
        RasterFormat::Png,
    )
    .unwrap();
    let img = decode_rgba(&bytes);
    assert_eq!(img.get_pixel(72, 10).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(72, 70).0, [255, 0, 0, 255]);
}

#[test]
fn transparent_jpeg_lands_on_white() {
    let r = ResvgRasterizer::new();
    let bytes = rasterize(
        &r,
        &doc("#ff0000", small()),
        small(),
        Some(Paint::Transparent),
        RasterFormat::Jpeg,
    )
    .unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
    let img = decode_rgba(&bytes);
    let top = img.get_pixel(72, 10).0;
    assert!(close(top[0], 255) && close(top[1], 255) && close(top[2], 255), "{top:?}");
    let bottom = img.get_pixel(72, 70).0;
    assert!(close(bottom[0], 255) && close(bottom[1], 0), "{bottom:?}");
}

#[test]
fn surface_matches_requested_size_not_viewbox() {
    let size = OutputSize {
        width: 300,
        height: 90,
    };
    let surface = ResvgRasterizer::new()
        .decode(&doc("#000", size), size)
        .unwrap();
    assert_eq!(surface.size(), size);
}

#[test]
fn transparent_fill_draws_nothing() {
    let surface = ResvgRasterizer::new()
        .decode(&doc("transparent", small()), small())
        .unwrap();
    assert!(surface.to_rgba8().chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn bad_markup_fails_without_output() {
    let r = ResvgRasterizer::new();
    let err = rasterize(&r, "<svg", small(), None, RasterFormat::Png).unwrap_err();
    assert!(matches!(err, WaveError::Other(_)));
}

#[test]
fn oversized_surface_is_rejected() {
    let size = OutputSize {
        width: MAX_SURFACE_DIM + 1,
        height: 10,
    };
    let err = ResvgRasterizer::new()
        .decode(&doc("#000", small()), size)
        .unwrap_err();
    assert!(err.to_string().contains("surface too large"));
}

#[test]
fn jpeg_quality_is_clamped_and_trades_size() {
    assert_eq!(ResvgRasterizer::new().with_jpeg_quality(0).jpeg_quality, 1);
    assert_eq!(ResvgRasterizer::new().with_jpeg_quality(250).jpeg_quality, 100);

    let size = OutputSize {
        width: 480,
        height: 240,
    };
    let markup = doc("#4f46e5", size);
    let encode = |quality: u8| {
        let r = ResvgRasterizer::new().with_jpeg_quality(quality);
        rasterize(&r, &markup, size, None, RasterFormat::Jpeg).unwrap()
    };
    let rough = encode(5);
    let fine = encode(100);
    assert!(rough.len() < fine.len());
    assert_eq!(decode_rgba(&rough).dimensions(), (480, 240));
}
