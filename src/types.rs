//! Serialized data model of the gallery manifest.
//!
//! The JSON shape is consumed by the site front-end, so field names and key
//! order are part of the contract:
//!
//! ```text
//! flat:    [{ "name", "url", "width", "height", "type", "size" }, ...]
//! grouped: [{ "name", "alternates": [{ "url", "width", "height", "type", "size" }, ...] }, ...]
//! ```

use serde::Serialize;

/// Metadata for a single image file.
///
/// `width` and `height` are `None` (serialized as `null`) when the image
/// header could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    /// Site-relative URL, e.g. `/gallery/cat-1.png`
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Lowercase extension without the dot
    #[serde(rename = "type")]
    pub kind: String,
    /// File size in bytes
    pub size: u64,
}

/// An entry of the flat layout: the image metadata plus its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedEntry {
    /// Filename stem (extension stripped)
    pub name: String,
    #[serde(flatten)]
    pub entry: ImageEntry,
}

/// Images sharing a dash-delimited filename prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryGroup {
    pub name: String,
    /// Variants in directory-listing order
    pub alternates: Vec<ImageEntry>,
}

/// The complete manifest. Serializes as a bare JSON array in both layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Manifest {
    Flat(Vec<NamedEntry>),
    Grouped(Vec<GalleryGroup>),
}

impl Manifest {
    /// Number of top-level items: entries for flat, groups for grouped.
    pub fn len(&self) -> usize {
        match self {
            Manifest::Flat(entries) => entries.len(),
            Manifest::Grouped(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of images, regardless of layout.
    pub fn image_count(&self) -> usize {
        match self {
            Manifest::Flat(entries) => entries.len(),
            Manifest::Grouped(groups) => groups.iter().map(|g| g.alternates.len()).sum(),
        }
    }

    /// Number of images whose dimensions could not be determined.
    pub fn missing_dimensions(&self) -> usize {
        let missing = |e: &ImageEntry| e.width.is_none() || e.height.is_none();
        match self {
            Manifest::Flat(entries) => entries.iter().filter(|n| missing(&n.entry)).count(),
            Manifest::Grouped(groups) => groups
                .iter()
                .flat_map(|g| g.alternates.iter())
                .filter(|e| missing(e))
                .count(),
        }
    }
}
