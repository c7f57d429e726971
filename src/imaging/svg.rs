//! SVG size detection from the root `<svg>` element.
//!
//! Resolution order:
//!
//! 1. `width` and `height` attributes, when both are unitless or `px`
//! 2. one of them plus the `viewBox` aspect ratio
//! 3. the `viewBox` width and height
//!
//! Fractional sizes are rounded to the nearest pixel.

use super::backend::{BackendError, Dimensions};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static SVG_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b([^>]*)>").expect("valid svg root regex"));

static SVG_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)(width|height|viewBox)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("valid svg attribute regex")
});

/// Read an SVG file and determine its pixel size.
pub fn identify(path: &Path) -> Result<Dimensions, BackendError> {
    let content = std::fs::read_to_string(path)?;
    parse_dimensions(&content).ok_or_else(|| {
        BackendError::ProcessingFailed(format!("No usable SVG size in {}", path.display()))
    })
}

/// Determine the size of an SVG document from its markup.
pub fn parse_dimensions(content: &str) -> Option<Dimensions> {
    let attrs = SVG_ROOT.captures(content)?.get(1)?.as_str();

    let mut width = None;
    let mut height = None;
    let mut view_box = None;
    for cap in SVG_ATTR.captures_iter(attrs) {
        let value = cap.get(2).or_else(|| cap.get(3)).map_or("", |m| m.as_str());
        match &cap[1] {
            "width" => width = parse_length(value),
            "height" => height = parse_length(value),
            _ => view_box = parse_view_box(value),
        }
    }

    let (w, h) = match (width, height, view_box) {
        (Some(w), Some(h), _) => (w, h),
        (Some(w), None, Some((vw, vh))) => (w, w * vh / vw),
        (None, Some(h), Some((vw, vh))) => (h * vw / vh, h),
        (None, None, Some((vw, vh))) => (vw, vh),
        _ => return None,
    };

    Some(Dimensions {
        width: w.round() as u32,
        height: h.round() as u32,
    })
}

/// Parse a unitless or `px` length. Relative units are not resolvable here.
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

/// Parse `min-x min-y width height`, separated by whitespace and/or commas.
fn parse_view_box(value: &str) -> Option<(f64, f64)> {
    let parts: Vec<f64> = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [_, _, w, h] if *w > 0.0 && *h > 0.0 => Some((*w, *h)),
        _ => None,
    }
}
