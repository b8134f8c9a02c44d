use crate::foundation::core::{DESIGN_HEIGHT, DESIGN_WIDTH, OutputSize};

/// SVG namespace written on the root element.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Wrap path data into a standalone SVG document.
///
/// The document declares the requested pixel size, a viewBox over the 1440x320 design canvas and
/// `preserveAspectRatio="none"`, so any output size stretches the design the way the preview does.
/// `fill` is emitted as written (a hex color or `transparent`), escaped for attribute context.
pub fn svg_document(path_data: &str, fill: &str, size: OutputSize) -> String {
    let size = OutputSize::clamped(f64::from(size.width), f64::from(size.height));
    format!(
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {vw} {vh}" preserveAspectRatio="none"><path fill="{fill}" d="{d}" /></svg>"#,
        w = size.width,
        h = size.height,
        vw = DESIGN_WIDTH,
        vh = DESIGN_HEIGHT,
        fill = escape_attr(fill.trim()),
        d = escape_attr(path_data),
    )
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
