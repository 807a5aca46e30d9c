use std::fmt;

/// The color space an image's leading three channels are expressed in.
///
/// RGB and HSI buffers share the same physical layout. The tag is what
/// tells a conversion how to read the samples, so conversions check it
/// before touching any pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green and blue, each in `[0, 1]`.
    Rgb,
    /// Hue in radians `[0, 2π)`, saturation and intensity in `[0, 1]`.
    Hsi,
}

impl ColorSpace {
    /// Check that the tag matches the color space an operation expects.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ImageError::InvalidColorSpace`] when the tags differ.
    pub fn expect(self, expected: ColorSpace) -> Result<(), crate::ImageError> {
        if self != expected {
            return Err(crate::ImageError::InvalidColorSpace {
                expected,
                found: self,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorSpace::Rgb => write!(f, "RGB"),
            ColorSpace::Hsi => write!(f, "HSI"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorSpace;
    use crate::ImageError;

    #[test]
    fn expect_matching_space() {
        assert!(ColorSpace::Rgb.expect(ColorSpace::Rgb).is_ok());
        assert!(ColorSpace::Hsi.expect(ColorSpace::Hsi).is_ok());
    }

    #[test]
    fn expect_mismatched_space() {
        let err = ColorSpace::Hsi.expect(ColorSpace::Rgb).unwrap_err();
        assert_eq!(
            err,
            ImageError::InvalidColorSpace {
                expected: ColorSpace::Rgb,
                found: ColorSpace::Hsi,
            }
        );
        assert_eq!(
            err.to_string(),
            "Expected an image in the RGB color space, got HSI"
        );
    }
}
