use crate::{color_space::ColorSpace, error::ImageError};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use tinct_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

impl TryFrom<ImageSize> for [u32; 2] {
    type Error = ImageError;

    fn try_from(size: ImageSize) -> Result<Self, Self::Error> {
        match (u32::try_from(size.width), u32::try_from(size.height)) {
            (Ok(width), Ok(height)) => Ok([width, height]),
            _ => Err(ImageError::ImageSizeOverflow(size)),
        }
    }
}

impl ImageSize {
    /// Number of samples in an image of this size with `channels` channels,
    /// or `None` if it does not fit in a `usize`.
    pub fn num_samples(&self, channels: usize) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(channels)
    }
}

/// Represents an image with pixel data.
///
/// The samples are stored row-major with shape (H, W, C). The color space tag
/// says how the first three channels of every pixel are to be read; a fourth
/// channel, when present, is alpha.
///
/// The sample storage is private and its length is checked on construction,
/// so every `Image` satisfies `len == width * height * C`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    color_space: ColorSpace,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Create a new RGB image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Returns
    ///
    /// A new image tagged [`ColorSpace::Rgb`].
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, or the
    /// image has no pixels, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct_image::{ColorSpace, Image, ImageSize};
    ///
    /// let image = Image::<f32, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0.0; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// assert_eq!(image.color_space(), ColorSpace::Rgb);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        Self::with_color_space(size, data, ColorSpace::Rgb)
    }

    /// Create a new image from pixel data expressed in the given color space.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, or the
    /// image has no pixels, an error is returned.
    pub fn with_color_space(
        size: ImageSize,
        data: Vec<T>,
        color_space: ColorSpace,
    ) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage(size));
        }

        // check if the data length matches the image size
        let expected = size
            .num_samples(C)
            .ok_or(ImageError::ImageSizeOverflow(size))?;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self {
            size,
            color_space,
            data,
        })
    }

    /// Create a new RGB image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The default value of the pixel data.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinct_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 4>::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     0.0,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 4);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let len = size
            .num_samples(C)
            .ok_or(ImageError::ImageSizeOverflow(size))?;
        Image::new(size, vec![val; len])
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Get the color space the image is expressed in.
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Retag the image.
    ///
    /// Only the tag changes; callers writing samples through
    /// [`Image::as_slice_mut`] are responsible for keeping the two in agreement.
    pub fn set_color_space(&mut self, color_space: ColorSpace) {
        self.color_space = color_space;
    }

    /// Get the pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::{ColorSpace, Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0.0; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);
        assert_eq!(image.color_space(), ColorSpace::Rgb);

        Ok(())
    }

    #[test]
    fn image_invalid_data_length() {
        let res = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0; 11],
        );
        assert_eq!(res.unwrap_err(), ImageError::InvalidChannelShape(11, 12));
    }

    #[test]
    fn image_empty() {
        let size = ImageSize {
            width: 0,
            height: 4,
        };
        let res = Image::<f32, 4>::new(size, vec![]);
        assert_eq!(res.unwrap_err(), ImageError::EmptyImage(size));
    }

    #[test]
    fn image_with_color_space() -> Result<(), ImageError> {
        let mut image = Image::<f64, 4>::with_color_space(
            ImageSize {
                height: 2,
                width: 3,
            },
            vec![0.0; 2 * 3 * 4],
            ColorSpace::Hsi,
        )?;
        assert_eq!(image.color_space(), ColorSpace::Hsi);
        assert_eq!(image.num_channels(), 4);

        image.set_color_space(ColorSpace::Rgb);
        assert_eq!(image.color_space(), ColorSpace::Rgb);

        Ok(())
    }

    #[test]
    fn image_size_overflow() {
        let size = ImageSize {
            width: usize::MAX / 2 + 1,
            height: 2,
        };
        assert_eq!(size.num_samples(1), None);

        let res = Image::<f32, 1>::new(size, vec![]);
        assert_eq!(res.unwrap_err(), ImageError::ImageSizeOverflow(size));

        // fails before allocating
        let res = Image::<u8, 3>::from_size_val(size, 0);
        assert_eq!(res.unwrap_err(), ImageError::ImageSizeOverflow(size));
    }

    #[test]
    fn image_size_to_u32() {
        let dims: Result<[u32; 2], _> = ImageSize {
            width: 640,
            height: 480,
        }
        .try_into();
        assert_eq!(dims, Ok([640, 480]));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn image_size_to_u32_overflow() {
        let size = ImageSize {
            width: u32::MAX as usize + 1,
            height: 1,
        };
        let dims: Result<[u32; 2], _> = size.try_into();
        assert_eq!(dims, Err(ImageError::ImageSizeOverflow(size)));
    }
}
