//! CLI output formatting.
//!
//! # Information-First Display
//!
//! The primary display for every entity (entry, group, alternate) is its
//! positional index and name, with dimensions, type and size as detail.
//! Images whose header could not be read show `?x?` in place of dimensions.
//!
//! # Output Format
//!
//! ## Check (flat)
//!
//! ```text
//! Images
//! 001 cat-1 (png, 640x480, 1234 bytes)
//!     URL: /gallery/cat-1.png
//! 002 broken (png, ?x?, 20 bytes)
//!     URL: /gallery/broken.png
//! ```
//!
//! ## Check (grouped)
//!
//! ```text
//! Groups
//! 001 cat (2 alternates)
//!     001 /gallery/cat-1.png (png, 640x480, 1234 bytes)
//!     002 /gallery/cat-2.png (png, 640x480, 1301 bytes)
//! ```
//!
//! ## Build
//!
//! ```text
//! Wrote 3 entries to public/gallery.json
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::types::{ImageEntry, Manifest};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// `(png, 640x480, 1234 bytes)`
fn entry_detail(entry: &ImageEntry) -> String {
    let dims = match (entry.width, entry.height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => "?x?".to_string(),
    };
    format!("({}, {}, {} bytes)", entry.kind, dims, entry.size)
}

/// Format the inventory shown by `check`.
pub fn format_check_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    match manifest {
        Manifest::Flat(entries) => {
            lines.push("Images".to_string());
            for (i, named) in entries.iter().enumerate() {
                lines.push(format!(
                    "{} {} {}",
                    format_index(i + 1),
                    named.name,
                    entry_detail(&named.entry)
                ));
                lines.push(format!("    URL: {}", named.entry.url));
            }
        }
        Manifest::Grouped(groups) => {
            lines.push("Groups".to_string());
            for (i, group) in groups.iter().enumerate() {
                lines.push(format!(
                    "{} {} ({})",
                    format_index(i + 1),
                    group.name,
                    plural(group.alternates.len(), "alternate", "alternates")
                ));
                for (j, entry) in group.alternates.iter().enumerate() {
                    lines.push(format!(
                        "    {} {} {}",
                        format_index(j + 1),
                        entry.url,
                        entry_detail(entry)
                    ));
                }
            }
        }
    }

    if manifest.is_empty() {
        lines.push("    (no images found)".to_string());
    }

    lines
}

/// Format the summary printed after the manifest is written.
pub fn format_build_output(manifest: &Manifest, output: &Path) -> Vec<String> {
    let file = output
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());

    let mut lines = vec![match manifest {
        Manifest::Flat(entries) => format!(
            "Wrote {} to {}",
            plural(entries.len(), "entry", "entries"),
            file
        ),
        Manifest::Grouped(groups) => format!(
            "Wrote {} ({}) to {}",
            plural(groups.len(), "group", "groups"),
            plural(manifest.image_count(), "image", "images"),
            file
        ),
    }];

    let missing = manifest.missing_dimensions();
    if missing > 0 {
        lines.push(format!(
            "    {} without dimensions",
            plural(missing, "image", "images")
        ));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(manifest: &Manifest) {
    for line in format_check_output(manifest) {
        println!("{}", line);
    }
}

/// Print build output to stdout.
pub fn print_build_output(manifest: &Manifest, output: &Path) {
    for line in format_build_output(manifest, output) {
        println!("{}", line);
    }
}
