//! Pure Rust identification backend.
//!
//! | Format | Crate / function |
//! |---|---|
//! | JPEG, PNG, GIF, WebP, BMP | `image::ImageReader` with content sniffing (header only) |
//! | SVG | [`svg::identify`](super::svg::identify) (root element attributes) |
//!
//! Raster formats are detected from the leading bytes, not the extension,
//! so PNG data saved as `photo.jpg` still reports its real size.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::svg;
use image::ImageReader;
use std::path::Path;

/// Pure Rust backend using the `image` crate for raster formats.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        if is_svg(path) {
            return svg::identify(path);
        }
        let reader = ImageReader::open(path)?.with_guessed_format()?;
        if reader.format().is_none() {
            return Err(BackendError::Unsupported(path.display().to_string()));
        }
        let (width, height) = reader.into_dimensions().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }
}
