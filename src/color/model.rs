use std::fmt;

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// HSL color with every component normalized to `[0, 1]` (hue is a fraction of a turn).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HslColor {
    /// Hue in turns.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Lightness.
    pub l: f64,
}

impl RgbColor {
    /// Opaque white, used as the JPEG backdrop when no background is set.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Encode as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Fill or background value as written by the user: a hex color or the `transparent` sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paint {
    /// No paint; alpha is preserved where the format allows it.
    Transparent,
    /// Opaque color.
    Color(RgbColor),
}

impl Paint {
    /// Literal accepted (case-insensitively) for [`Paint::Transparent`].
    pub const TRANSPARENT: &'static str = "transparent";

    /// Parse user text. Returns `None` for anything that is neither the sentinel nor valid hex.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case(Self::TRANSPARENT) {
            return Some(Self::Transparent);
        }
        parse_hex(text).map(Self::Color)
    }

    /// The opaque color, if any.
    pub fn color(self) -> Option<RgbColor> {
        match self {
            Self::Transparent => None,
            Self::Color(c) => Some(c),
        }
    }
}

/// Parse `#rgb`, `#rrggbb`, `rgb` or `rrggbb` (case-insensitive).
pub fn parse_hex(text: &str) -> Option<RgbColor> {
    let s = text.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    fn nibble(b: u8) -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    }

    let bytes = s.as_bytes();
    match bytes.len() {
        3 => {
            let expand = |b: u8| nibble(b) * 17;
            Some(RgbColor::new(
                expand(bytes[0]),
                expand(bytes[1]),
                expand(bytes[2]),
            ))
        }
        6 => {
            let byte = |i: usize| (nibble(bytes[i]) << 4) | nibble(bytes[i + 1]);
            Some(RgbColor::new(byte(0), byte(2), byte(4)))
        }
        _ => None,
    }
}

/// Lowercase `#rrggbb` for `c`.
pub fn rgb_to_hex(c: RgbColor) -> String {
    c.to_hex()
}

/// Standard sRGB to HSL conversion.
pub fn rgb_to_hsl(c: RgbColor) -> HslColor {
    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return HslColor { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    HslColor { h: h / 6.0, s, l }
}

/// Standard HSL to sRGB conversion, rounding each channel to the nearest byte.
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = hsl.h.rem_euclid(1.0);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    fn to_u8(x: f64) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    if s == 0.0 {
        let v = to_u8(l);
        return RgbColor::new(v, v, v);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    RgbColor::new(
        to_u8(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, h)),
        to_u8(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

/// Parse `text` as hex and convert it to HSL.
pub fn hex_to_hsl(text: &str) -> Option<HslColor> {
    parse_hex(text).map(rgb_to_hsl)
}

/// Lowercase `#rrggbb` for an HSL color.
pub fn hsl_to_hex(hsl: HslColor) -> String {
    hsl_to_rgb(hsl).to_hex()
}

/// Step the HSL lightness of `hex` by `delta_percent` points, keeping hue and saturation.
///
/// `fallback_hex` is used when `hex` does not parse. If neither parses, `fallback_hex` is
/// returned untouched so the caller's field keeps whatever the user typed.
pub fn nudge_lightness(hex: &str, fallback_hex: &str, delta_percent: f64) -> String {
    let Some(base) = parse_hex(hex).or_else(|| parse_hex(fallback_hex)) else {
        return fallback_hex.to_owned();
    };

    let hsl = rgb_to_hsl(base);
    let l = (hsl.l * 100.0 + delta_percent).clamp(0.0, 100.0) / 100.0;
    hsl_to_rgb(HslColor { l, ..hsl }).to_hex()
}

#[cfg(test)]
#[path = "../../tests/unit/color/model.rs"]
mod tests;
