#![deny(missing_docs)]
//! Image types for floating point color buffers tagged with their color space

/// image representation for color processing.
pub mod image;

/// color space tags carried by every image.
pub mod color_space;

/// Error types for the image module.
pub mod error;

/// image basic operations.
pub mod ops;

pub use crate::color_space::ColorSpace;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
