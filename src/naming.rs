//! Centralized filename parsing for gallery images.
//!
//! Every image filename is split into a stem and an extension, and the stem
//! is split once more at its first dash to find the group the image belongs
//! to:
//!
//! - `cat-1.png` → stem "cat-1", type "png", group "cat"
//! - `cat-night-2.webp` → stem "cat-night-2", type "webp", group "cat"
//! - `dog.png` → stem "dog", type "png", group "dog"
//! - `Photo.JPG` → stem "Photo", type "jpg", group "Photo"

use std::path::Path;

/// Result of parsing an image filename like `cat-1.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Filename with the last extension stripped.
    pub stem: String,
    /// Lowercased extension without the dot. Empty when there is none.
    pub kind: String,
    /// Group key: the stem up to its first dash, or the whole stem.
    pub group: String,
}

/// Parse an image filename into stem, lowercase type and group key.
///
/// Dotfiles without a further extension (`.png`) have no type, matching
/// [`Path::extension`].
pub fn parse_file_name(filename: &str) -> ParsedName {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let kind = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let group = group_key(&stem).to_string();
    ParsedName { stem, kind, group }
}

/// Group key for a filename stem.
///
/// The substring before the first dash. A stem without a dash, or one that
/// starts with a dash and so has an empty prefix, is its own group.
pub fn group_key(stem: &str) -> &str {
    match stem.split_once('-') {
        Some((prefix, _)) if !prefix.is_empty() => prefix,
        _ => stem,
    }
}
