//! Image identification: pixel dimensions without decoding pixel data.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify raster** | `image::image_dimensions` |
//! | **Identify SVG** | root element attributes via `regex` |
//!
//! The module is split into:
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **SVG**: attribute and `viewBox` parsing

pub mod backend;
pub mod rust_backend;
pub mod svg;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use rust_backend::RustBackend;
