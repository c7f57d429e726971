//! Directory scanning and per-image metadata extraction.
//!
//! Scans a single directory (no recursion) and produces one [`ScannedImage`]
//! for every regular file with a recognized image extension. Files come back
//! in filesystem-listing order; nothing is sorted, so the manifest mirrors
//! what the directory reports.
//!
//! ## Recognized Extensions
//!
//! `jpg`, `jpeg`, `png`, `gif`, `webp`, `bmp`, plus `svg` when enabled.
//! Matching ignores case: `Photo.JPG` is an image of type `jpg`.
//!
//! ## Failure Modes
//!
//! - Missing source directory: [`ScanError::DirectoryNotFound`], nothing is scanned.
//! - Unreadable image header: logged as a warning, the entry keeps
//!   `width`/`height` as `None` and the scan continues.
//! - Failing `stat` on a listed file: propagated as [`ScanError::Io`].
//! - Filename that is not valid UTF-8: logged and skipped, since no URL
//!   built from it would point back at the file.

use crate::config::GalleryConfig;
use crate::imaging::ImageBackend;
use crate::naming::{ParsedName, parse_file_name};
use crate::types::ImageEntry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Gallery directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Gallery source is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raster extensions always recognized.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Recognized only when `include_svg` is set.
pub const SVG_EXTENSION: &str = "svg";

/// A recognized image file with its parsed name and manifest entry.
#[derive(Debug, Clone)]
pub struct ScannedImage {
    pub filename: String,
    pub name: ParsedName,
    pub entry: ImageEntry,
}

/// Scan `source` for images.
///
/// `source` is resolved by the caller; `config` supplies the URL prefix and
/// whether SVG files count as images.
pub fn scan(
    source: &Path,
    config: &GalleryConfig,
    backend: &impl ImageBackend,
) -> Result<Vec<ScannedImage>, ScanError> {
    if !source.exists() {
        return Err(ScanError::DirectoryNotFound(source.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(ScanError::NotADirectory(source.to_path_buf()));
    }

    let mut images = Vec::new();
    for path in fs::read_dir(source)?.filter_map(|e| e.ok()).map(|e| e.path()) {
        if !is_image(&path, config.include_svg) {
            tracing::debug!(path = %path.display(), "skipping non-image entry");
            continue;
        }
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping image with non-UTF-8 filename");
            continue;
        };
        images.push(scan_image(&path, filename, &config.url_prefix, backend)?);
    }

    Ok(images)
}

/// Whether `path` is a regular file with a recognized extension.
pub fn is_image(path: &Path, include_svg: bool) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str()) || (include_svg && ext == SVG_EXTENSION)
}

/// Site-relative URL of a file under `prefix`. Trailing slashes on the
/// prefix are collapsed so `/gallery/` and `/gallery` behave the same.
pub fn image_url(prefix: &str, filename: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), filename)
}

fn scan_image(
    path: &Path,
    filename: &str,
    url_prefix: &str,
    backend: &impl ImageBackend,
) -> Result<ScannedImage, ScanError> {
    let name = parse_file_name(filename);

    let dimensions = match backend.identify(path) {
        Ok(dims) => Some(dims),
        Err(e) => {
            tracing::warn!(file = %filename, error = %e, "could not get dimensions");
            None
        }
    };

    let size = fs::metadata(path)?.len();

    let entry = ImageEntry {
        url: image_url(url_prefix, filename),
        width: dimensions.map(|d| d.width),
        height: dimensions.map(|d| d.height),
        kind: name.kind.clone(),
        size,
    };

    Ok(ScannedImage {
        filename: filename.to_string(),
        name,
        entry,
    })
}
