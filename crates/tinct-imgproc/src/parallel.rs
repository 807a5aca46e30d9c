use rayon::prelude::*;

use tinct_image::Image;

/// Controls how per-pixel operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Apply a function to each pixel in the image in parallel.
///
/// The source and destination must have the same size.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    debug_assert_eq!(src.size(), dst.size());
    let cols = src.cols();

    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel in the image on the current thread.
///
/// The source and destination must have the same size.
pub fn iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]),
) {
    debug_assert_eq!(src.size(), dst.size());

    src.as_slice()
        .chunks_exact(C1)
        .zip(dst.as_slice_mut().chunks_exact_mut(C2))
        .for_each(|(src_pixel, dst_pixel)| {
            f(src_pixel, dst_pixel);
        });
}

/// Apply a function to each pixel in the image with the given strategy.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `src` - The source image.
/// * `dst` - The destination image, same size as the source.
/// * `f` - The operation to perform on each (source, destination) pixel pair.
pub fn iter_pixels_with<T1, const C1: usize, T2, const C2: usize>(
    strategy: ExecutionStrategy,
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    match strategy {
        ExecutionStrategy::ParallelRows => par_iter_rows(src, dst, f),
        ExecutionStrategy::Serial => iter_rows(src, dst, f),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_image::{ImageError, ImageSize};

    fn ramp() -> Result<Image<f32, 3>, ImageError> {
        let size = ImageSize {
            width: 5,
            height: 4,
        };
        let data = (0..5 * 4 * 3).map(|x| x as f32).collect();
        Image::new(size, data)
    }

    #[test]
    fn test_iter_pixels_serial() -> Result<(), ImageError> {
        let src = ramp()?;
        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;

        iter_pixels_with(ExecutionStrategy::Serial, &src, &mut dst, |s, d| {
            d[0] = s[0] + s[1] + s[2];
        });

        assert_eq!(dst.as_slice()[0], 3.0);
        assert_eq!(dst.as_slice()[19], 57.0 + 58.0 + 59.0);

        Ok(())
    }

    #[test]
    fn test_strategies_agree() -> Result<(), ImageError> {
        let src = ramp()?;
        let mut serial = Image::<f32, 3>::from_size_val(src.size(), 0.0)?;
        let mut parallel = serial.clone();

        let op = |s: &[f32], d: &mut [f32]| {
            d[0] = s[2];
            d[1] = s[1] * 2.0;
            d[2] = s[0];
        };

        iter_pixels_with(ExecutionStrategy::Serial, &src, &mut serial, op);
        iter_pixels_with(ExecutionStrategy::ParallelRows, &src, &mut parallel, op);

        assert_eq!(serial.as_slice(), parallel.as_slice());
        assert_eq!(&serial.as_slice()[..3], &[2.0, 2.0, 0.0]);

        Ok(())
    }

    #[test]
    fn test_default_strategy() {
        assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::ParallelRows);
    }
}
