//! Shared test utilities for the gallery-manifest test suite.
//!
//! Provides fixture writers (real encoded images and raw text files) and
//! extractors that flatten manifest data into comparable shapes.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_image(tmp.path(), "cat-1.png", 4, 3);
//! write_text(tmp.path(), "broken.png", "not an image");
//! ```

use std::path::{Path, PathBuf};

use crate::types::GalleryGroup;

// =========================================================================
// Fixture writers
// =========================================================================

/// Encode a blank image of the given size. The format follows the extension.
pub fn write_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    // JPEG has no alpha channel; GIF frames are built from RGBA.
    let img = if ext == "gif" {
        image::DynamicImage::new_rgba8(width, height)
    } else {
        image::DynamicImage::new_rgb8(width, height)
    };
    img.save(&path)
        .unwrap_or_else(|e| panic!("failed to write fixture image {}: {e}", path.display()));
    path
}

/// Write raw text under `dir`, e.g. a corrupt "image" or an SVG document.
pub fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("failed to write fixture {}: {e}", path.display()));
    path
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Group names with their alternate URLs, in manifest order.
pub fn groups_shape(groups: &[GalleryGroup]) -> Vec<(&str, Vec<&str>)> {
    groups
        .iter()
        .map(|g| {
            (
                g.name.as_str(),
                g.alternates.iter().map(|e| e.url.as_str()).collect(),
            )
        })
        .collect()
}
