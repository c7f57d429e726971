//! Gallery configuration module.
//!
//! Handles loading, validating and layering `gallery.toml`. Stock defaults
//! reproduce the zero-argument behaviour: scan `public/gallery`, write
//! `public/gallery.json`, one flat entry per image.
//!
//! ## Layering
//!
//! ```text
//! stock defaults  ←  gallery.toml (optional)  ←  CLI flags
//! ```
//!
//! Each layer only carries the keys it wants to override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source_dir = "public/gallery"   # Directory scanned for images
//! output = "public/gallery.json"  # Manifest path, overwritten each run
//! url_prefix = "/gallery"         # Prepended to each filename to build its URL
//! layout = "flat"                 # "flat" or "grouped"
//! include_svg = false             # Treat .svg files as images
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Shape of the generated manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One `{name, url, width, height, type, size}` entry per image.
    #[default]
    Flat,
    /// Images grouped by the filename prefix before the first dash.
    Grouped,
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory scanned for images (not recursive).
    pub source_dir: String,
    /// Path of the JSON manifest.
    pub output: String,
    /// URL prefix for each image, e.g. `/gallery` → `/gallery/cat-1.png`.
    pub url_prefix: String,
    pub layout: Layout,
    /// Include `.svg` files in the recognized extension set.
    pub include_svg: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            source_dir: "public/gallery".to_string(),
            output: "public/gallery.json".to_string(),
            url_prefix: "/gallery".to_string(),
            layout: Layout::Flat,
            include_svg: false,
        }
    }
}

impl GalleryConfig {
    /// Validate that the paths and prefix are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "source_dir must not be empty".into(),
            ));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        if self.url_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "url_prefix must not be empty (use \"/\" for the site root)".into(),
            ));
        }
        Ok(())
    }
}

/// Values given on the command line. `None`/`false` leaves the lower layer alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_dir: Option<String>,
    pub output: Option<String>,
    pub url_prefix: Option<String>,
    pub grouped: bool,
    pub include_svg: bool,
}

impl ConfigOverrides {
    /// Sparse TOML table holding only the values that were set.
    pub fn to_toml(&self) -> toml::Value {
        let mut table = toml::map::Map::new();
        if let Some(ref source_dir) = self.source_dir {
            table.insert("source_dir".into(), toml::Value::String(source_dir.clone()));
        }
        if let Some(ref output) = self.output {
            table.insert("output".into(), toml::Value::String(output.clone()));
        }
        if let Some(ref url_prefix) = self.url_prefix {
            table.insert("url_prefix".into(), toml::Value::String(url_prefix.clone()));
        }
        if self.grouped {
            table.insert("layout".into(), toml::Value::String("grouped".into()));
        }
        if self.include_svg {
            table.insert("include_svg".into(), toml::Value::Boolean(true));
        }
        toml::Value::Table(table)
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge the layers in order, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = Option<toml::Value>>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = overlays
        .into_iter()
        .flatten()
        .fold(base, merge_toml);
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config: stock defaults, then `config_path` if it
/// exists, then the CLI overrides.
pub fn load_config(
    config_path: &Path,
    overrides: &ConfigOverrides,
) -> Result<GalleryConfig, ConfigError> {
    let file = load_raw_config(config_path)?;
    if file.is_some() {
        tracing::debug!(path = %config_path.display(), "loaded config file");
    }
    resolve_config(stock_defaults_value(), [file, Some(overrides.to_toml())])
}

/// Returns a fully-commented stock `gallery.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gallery Manifest Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Command-line flags override values in this file.
# Unknown keys will cause an error.

# Directory scanned for images. Subdirectories are ignored.
source_dir = "public/gallery"

# Where the JSON manifest is written. Overwritten on every run.
output = "public/gallery.json"

# URL prefix for each image: "/gallery" + "/" + filename.
url_prefix = "/gallery"

# Manifest layout:
#   "flat"    -> [{ name, url, width, height, type, size }, ...]
#   "grouped" -> [{ name, alternates: [{ url, width, height, type, size }] }, ...]
# Grouping uses the filename part before the first dash: cat-1.png and
# cat-2.png both land in group "cat".
layout = "flat"

# Recognized extensions are jpg, jpeg, png, gif, webp and bmp.
# Set to true to include svg as well.
include_svg = false
"##
}
