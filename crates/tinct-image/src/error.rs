use crate::{color_space::ColorSpace, image::ImageSize};

/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an image has no pixels.
    #[error("Image must have at least one pixel, got {0}")]
    EmptyImage(ImageSize),

    /// Error when the source and destination sizes differ.
    #[error("Invalid image size. Expected {0}x{1}, got {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when an operation receives an image in the wrong color space.
    #[error("Expected an image in the {expected} color space, got {found}")]
    InvalidColorSpace {
        /// The color space the operation requires.
        expected: ColorSpace,
        /// The color space the image is tagged with.
        found: ColorSpace,
    },

    /// Error when an operation does not support the number of channels.
    #[error("Unsupported number of channels ({0}), expected 3 or 4")]
    UnsupportedChannels(usize),

    /// Error when the image dimensions do not fit the target integer type.
    #[error("Image size {0} is too large")]
    ImageSizeOverflow(ImageSize),

    /// Error when a value cannot be represented in the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),
}
