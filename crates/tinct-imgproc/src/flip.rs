use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};
use tinct_image::{Image, ImageError};

/// Flip the input image vertically.
///
/// Images decoded top row first come out upside down once uploaded as a
/// texture with a bottom-left origin; flipping them first keeps them upright.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image, tagged with the same color space as the input.
///
/// # Example
///
/// ```
/// use tinct_image::{Image, ImageSize};
/// use tinct_imgproc::flip::vertical_flip;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0f32; 2 * 3 * 3],
/// )
/// .unwrap();
///
/// let flipped: Image<f32, 3> = vertical_flip(&image).unwrap();
///
/// assert_eq!(flipped.size().width, 2);
/// assert_eq!(flipped.size().height, 3);
/// ```
pub fn vertical_flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Clone + Send + Sync,
{
    let mut dst = src.clone();
    let cols = src.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .zip_eq(src.as_slice().par_chunks_exact(cols * C).rev())
        .for_each(|(dst_row, src_row)| {
            dst_row.clone_from_slice(src_row);
        });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use tinct_image::{ColorSpace, Image, ImageError, ImageSize};

    #[test]
    fn test_vflip() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;
        let data_expected = vec![4u8, 5, 2, 3, 0, 1];
        let flipped = super::vertical_flip(&image)?;
        assert_eq!(flipped.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_vflip_keeps_pixels_and_tag() -> Result<(), ImageError> {
        let image = Image::<f32, 4>::with_color_space(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![0.1, 0.2, 0.3, 1.0, 0.4, 0.5, 0.6, 0.5],
            ColorSpace::Hsi,
        )?;
        let flipped = super::vertical_flip(&image)?;
        assert_eq!(
            flipped.as_slice(),
            &[0.4, 0.5, 0.6, 0.5, 0.1, 0.2, 0.3, 1.0]
        );
        assert_eq!(flipped.color_space(), ColorSpace::Hsi);

        // flipping twice is the identity
        assert_eq!(super::vertical_flip(&flipped)?, image);
        Ok(())
    }
}
