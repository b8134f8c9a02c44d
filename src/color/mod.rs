//! Hex, RGB and HSL conversion plus WCAG contrast.

/// WCAG relative luminance, contrast ratio and grading.
pub mod contrast;
/// Color value types and conversions.
pub mod model;
