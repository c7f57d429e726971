//! Image identification backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between the scanner and the code
//! that actually opens image files. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use
//! `MockBackend` so scanning logic can run against placeholder files.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported image format: {0}")]
    Unsupported(String),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image identification backends.
pub trait ImageBackend {
    /// Get image dimensions, reading no more of the file than needed.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;
}
