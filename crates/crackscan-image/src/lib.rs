#![deny(missing_docs)]
//! Image container types for crack pattern analysis

/// image representation for the measurement pipeline.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
