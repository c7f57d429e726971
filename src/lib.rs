//! # Gallery Manifest
//!
//! Scans a directory of images and writes a JSON manifest describing each
//! one: name, site-relative URL, pixel dimensions, type and byte size. A
//! grouped layout clusters images that share a dash-delimited filename
//! prefix (`cat-1.png`, `cat-2.png`) into one entry with alternates.
//!
//! # Pipeline
//!
//! ```text
//! gallery.toml + flags  →  GalleryConfig
//! public/gallery/       →  Vec<ScannedImage>    (scan)
//! Vec<ScannedImage>     →  Manifest             (manifest::assemble)
//! Manifest              →  public/gallery.json  (manifest::write)
//! ```
//!
//! The manifest is regenerated from scratch on every run; no state survives
//! between runs apart from the output file itself.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `gallery.toml` loading, layering and validation |
//! | [`naming`] | Filename stem, type and group-key parsing |
//! | [`imaging`] | Header-only dimension reads for raster images and SVG |
//! | [`scan`] | Directory listing, extension filtering, per-file entries |
//! | [`manifest`] | Flat and grouped assembly, JSON output |
//! | [`types`] | Serialized manifest types |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | Tracing subscriber setup |
//!
//! # Failure Handling
//!
//! A missing source directory aborts the run before anything is written.
//! An image whose header cannot be read is kept with `null` dimensions and a
//! warning is logged; the rest of the directory is still processed.

pub mod config;
pub mod imaging;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
