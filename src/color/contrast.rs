use crate::color::model::{RgbColor, parse_hex};

/// WCAG relative luminance of an sRGB color.
pub fn relative_luminance(c: RgbColor) -> f64 {
    fn linear(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linear(c.r) + 0.7152 * linear(c.g) + 0.0722 * linear(c.b)
}

/// WCAG contrast ratio between two hex colors, in `[1, 21]`.
///
/// Returns `None` when either input fails to parse.
pub fn contrast_ratio(fg_hex: &str, bg_hex: &str) -> Option<f64> {
    let fg = parse_hex(fg_hex)?;
    let bg = parse_hex(bg_hex)?;
    Some(contrast_ratio_rgb(fg, bg))
}

/// [`contrast_ratio`] for already-parsed colors.
pub fn contrast_ratio_rgb(fg: RgbColor, bg: RgbColor) -> f64 {
    let a = relative_luminance(fg);
    let b = relative_luminance(bg);
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    (hi + 0.05) / (lo + 0.05)
}

/// Pass/fail flags for the WCAG 2.x text contrast levels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ContrastGrade {
    /// The ratio the flags were derived from.
    pub ratio: f64,
    /// AA for body text (>= 4.5).
    pub aa_normal: bool,
    /// AA for large text (>= 3.0).
    pub aa_large: bool,
    /// AAA for body text (>= 7.0).
    pub aaa_normal: bool,
    /// AAA for large text (>= 4.5).
    pub aaa_large: bool,
}

impl ContrastGrade {
    /// Grade a known ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: ratio >= 4.5,
            aa_large: ratio >= 3.0,
            aaa_normal: ratio >= 7.0,
            aaa_large: ratio >= 4.5,
        }
    }

    /// Grade two hex colors; indeterminate (`None`) if either is invalid.
    pub fn grade(fg_hex: &str, bg_hex: &str) -> Option<Self> {
        contrast_ratio(fg_hex, bg_hex).map(Self::from_ratio)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/contrast.rs"]
mod tests;
