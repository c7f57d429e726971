//! Manifest assembly and output.
//!
//! Turns scanned images into a [`Manifest`] in the configured [`Layout`] and
//! writes it as pretty-printed JSON:
//!
//! ```text
//! public/gallery/           flat                      grouped
//! ├── cat-1.png      →      [cat-1, cat-2, dog]   or  [cat: [cat-1, cat-2], dog: [dog]]
//! ├── cat-2.png
//! └── dog.png
//! ```
//!
//! Groups keep the order in which their first image was listed, and the
//! alternates inside a group keep listing order as well. The output is a
//! pure function of the directory contents, so unchanged inputs produce
//! byte-identical files.

use crate::config::{GalleryConfig, Layout};
use crate::imaging::ImageBackend;
use crate::scan::{self, ScanError, ScannedImage};
use crate::types::{GalleryGroup, ImageEntry, Manifest, NamedEntry};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scan the configured source directory and assemble the manifest.
pub fn build(
    config: &GalleryConfig,
    backend: &impl ImageBackend,
) -> Result<Manifest, ManifestError> {
    let images = scan::scan(Path::new(&config.source_dir), config, backend)?;
    Ok(assemble(images, config.layout))
}

/// Arrange scanned images in the requested layout.
pub fn assemble(images: Vec<ScannedImage>, layout: Layout) -> Manifest {
    match layout {
        Layout::Flat => Manifest::Flat(flatten(images)),
        Layout::Grouped => Manifest::Grouped(group(images)),
    }
}

fn flatten(images: Vec<ScannedImage>) -> Vec<NamedEntry> {
    images
        .into_iter()
        .map(|image| NamedEntry {
            name: image.name.stem,
            entry: image.entry,
        })
        .collect()
}

fn group(images: Vec<ScannedImage>) -> Vec<GalleryGroup> {
    let mut groups: IndexMap<String, Vec<ImageEntry>> = IndexMap::new();
    for image in images {
        groups
            .entry(image.name.group)
            .or_default()
            .push(image.entry);
    }
    groups
        .into_iter()
        .map(|(name, alternates)| GalleryGroup { name, alternates })
        .collect()
}

/// Render the manifest as pretty-printed JSON (two-space indent).
pub fn to_json(manifest: &Manifest) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Write the manifest to `path`, replacing any previous file.
///
/// Missing parent directories are created.
pub fn write(manifest: &Manifest, path: &Path) -> Result<(), ManifestError> {
    let json = to_json(manifest)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "wrote manifest");
    Ok(())
}
