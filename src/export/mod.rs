//! SVG serialization, rasterization and artifact delivery.

/// Artifact naming, sinks and clipboard.
pub mod artifact;
/// Rasterizer capability and the resvg binding.
pub mod raster;
/// SVG document writer.
pub mod svg;
