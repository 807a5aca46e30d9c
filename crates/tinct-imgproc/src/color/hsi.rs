use num_traits::{Float, FloatConst};
use tinct_image::{ColorSpace, Image, ImageError};

use crate::parallel::{self, ExecutionStrategy};

/// Intensity and saturation at or below this value are treated as zero when
/// recovering RGB from HSI.
pub const HSI_EPSILON: f64 = 0.05;

/// Parameters for the RGB <-> HSI conversions.
///
/// # Example
///
/// ```
/// use tinct_imgproc::color::HsiConfig;
/// use tinct_imgproc::parallel::ExecutionStrategy;
///
/// let config = HsiConfig::default()
///     .with_epsilon(0.01)
///     .with_strategy(ExecutionStrategy::Serial);
///
/// assert_eq!(config.epsilon, 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsiConfig {
    /// Threshold below which intensity yields black and saturation yields grey.
    pub epsilon: f64,
    /// How the pixels are iterated.
    pub strategy: ExecutionStrategy,
}

impl Default for HsiConfig {
    fn default() -> Self {
        Self {
            epsilon: HSI_EPSILON,
            strategy: ExecutionStrategy::default(),
        }
    }
}

impl HsiConfig {
    /// Set the intensity / saturation threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Convert a single RGB pixel to HSI.
///
/// # Arguments
///
/// * `r`, `g`, `b` - The color channels, nominally in `[0, 1]`.
///
/// # Returns
///
/// `[hue, saturation, intensity]` with the hue in radians in `[0, 2π)`.
///
/// Achromatic pixels (`r == g == b`, black included) have an undefined hue;
/// they map to `[0, 0, r]`.
///
/// # Example
///
/// ```
/// use tinct_imgproc::color::hsi_from_rgb_pixel;
///
/// let [h, s, i] = hsi_from_rgb_pixel(1.0f32, 0.0, 0.0);
///
/// assert_eq!(h, 0.0);
/// assert_eq!(s, 1.0);
/// assert!((i - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn hsi_from_rgb_pixel<T: Float + FloatConst>(r: T, g: T, b: T) -> [T; 3] {
    if r == g && g == b {
        return [T::zero(), T::zero(), r];
    }

    let two = T::one() + T::one();
    let three = two + T::one();

    let sum = r + g + b;
    let intensity = sum / three;

    let min = r.min(g).min(b);
    let saturation = if sum == T::zero() {
        T::zero()
    } else {
        T::one() - three * min / sum
    };

    let num = r - g / two - b / two;
    let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();

    // rounding can push the ratio just outside the domain of acos
    let theta = if den > T::zero() {
        (num / den).max(-T::one()).min(T::one()).acos()
    } else {
        T::zero()
    };

    // acos only covers [0, π]; the lower half of the hue circle is where b > g
    let hue = if b > g && theta > T::zero() {
        two * T::PI() - theta
    } else {
        theta
    };

    [hue, saturation, intensity]
}

/// Convert a single HSI pixel to RGB.
///
/// # Arguments
///
/// * `h` - The hue in radians. Values outside `[0, 2π)` are wrapped.
/// * `s` - The saturation in `[0, 1]`.
/// * `i` - The intensity in `[0, 1]`.
/// * `epsilon` - Intensity at or below it gives black, saturation at or below
///   it gives grey.
///
/// # Returns
///
/// `[r, g, b]`. The result is not clamped and may leave `[0, 1]` by rounding.
///
/// # Example
///
/// ```
/// use tinct_imgproc::color::rgb_from_hsi_pixel;
///
/// let [r, g, b] = rgb_from_hsi_pixel(0.0f32, 1.0, 1.0 / 3.0, 0.05);
///
/// assert!((r - 1.0).abs() < 1e-6);
/// assert!(g.abs() < 1e-6);
/// assert!(b.abs() < 1e-6);
/// ```
pub fn rgb_from_hsi_pixel<T: Float + FloatConst>(h: T, s: T, i: T, epsilon: T) -> [T; 3] {
    if i <= epsilon {
        return [T::zero(); 3];
    }

    if s <= epsilon {
        return [i, i, i];
    }

    let two = T::one() + T::one();
    let three = two + T::one();
    let two_pi = two * T::PI();
    let sector = two_pi / three;

    let h = h % two_pi;
    let h = if h < T::zero() { h + two_pi } else { h };

    // channel at the minimum of the sector, and the dominant one
    let low = i * (T::one() - s);
    let high = |h: T| i * (T::one() + s * h.cos() / (T::FRAC_PI_3() - h).cos());
    let total = three * i;

    if h < sector {
        let b = low;
        let r = high(h);
        let g = total - r - b;
        [r, g, b]
    } else if h < two * sector {
        let r = low;
        let g = high(h - sector);
        let b = total - r - g;
        [r, g, b]
    } else {
        let g = low;
        let b = high(h - two * sector);
        let r = total - g - b;
        [r, g, b]
    }
}

fn check_channels<const C: usize>() -> Result<(), ImageError> {
    if C != 3 && C != 4 {
        return Err(ImageError::UnsupportedChannels(C));
    }
    Ok(())
}

fn check_size<T, const C: usize>(src: &Image<T, C>, dst: &Image<T, C>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

fn cast_epsilon<T: Float>(epsilon: f64) -> Result<T, ImageError> {
    T::from(epsilon).ok_or_else(|| ImageError::CastError(std::any::type_name::<T>().to_string()))
}

/// Convert an RGB image to an HSI image.
///
/// The input image is assumed to have 3 or 4 channels in the order R, G, B
/// and optionally alpha, with the color channels in `[0, 1]`.
///
/// # Arguments
///
/// * `src` - The input RGB(A) image.
/// * `dst` - The output HSI(A) image, tagged [`ColorSpace::Hsi`] on success.
///
/// # Returns
///
/// The HSI image with the following channels:
///
/// * H: The hue channel in radians in `[0, 2π)`.
/// * S: The saturation channel in `[0, 1]`.
/// * I: The intensity channel in `[0, 1]`.
/// * A: The alpha channel, copied unchanged.
///
/// Precondition: the input image must be tagged [`ColorSpace::Rgb`].
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use tinct_image::{ColorSpace, Image, ImageSize};
/// use tinct_imgproc::color::hsi_from_rgb;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0.5f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut hsi = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// hsi_from_rgb(&image, &mut hsi).unwrap();
///
/// assert_eq!(hsi.color_space(), ColorSpace::Hsi);
/// assert_eq!(hsi.size(), image.size());
/// ```
pub fn hsi_from_rgb<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + FloatConst + Send + Sync,
{
    hsi_from_rgb_with(src, dst, &HsiConfig::default())
}

/// Convert an RGB image to an HSI image with the given configuration.
///
/// See [`hsi_from_rgb`].
pub fn hsi_from_rgb_with<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    config: &HsiConfig,
) -> Result<(), ImageError>
where
    T: Float + FloatConst + Send + Sync,
{
    check_channels::<C>()?;
    src.color_space().expect(ColorSpace::Rgb)?;
    check_size(src, dst)?;

    parallel::iter_pixels_with(config.strategy, src, dst, |src_pixel, dst_pixel| {
        let hsi = hsi_from_rgb_pixel(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel[..3].copy_from_slice(&hsi);
        dst_pixel[3..].copy_from_slice(&src_pixel[3..]);
    });

    dst.set_color_space(ColorSpace::Hsi);

    Ok(())
}

/// Convert an HSI image to an RGB image.
///
/// The input image is assumed to have 3 or 4 channels in the order H, S, I
/// and optionally alpha.
///
/// # Arguments
///
/// * `src` - The input HSI(A) image.
/// * `dst` - The output RGB(A) image, tagged [`ColorSpace::Rgb`] on success.
///
/// The RGB samples are not clamped. Pixels with an intensity at or below
/// [`HSI_EPSILON`] become black, and pixels with a saturation at or below it
/// become grey.
///
/// Precondition: the input image must be tagged [`ColorSpace::Hsi`].
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use tinct_image::{ColorSpace, Image, ImageSize};
/// use tinct_imgproc::color::{hsi_from_rgb, rgb_from_hsi};
///
/// let rgb = Image::<f64, 4>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![0.2, 0.4, 0.6, 0.5],
/// )
/// .unwrap();
///
/// let mut hsi = Image::from_size_val(rgb.size(), 0.0).unwrap();
/// hsi_from_rgb(&rgb, &mut hsi).unwrap();
///
/// let mut back = Image::from_size_val(rgb.size(), 0.0).unwrap();
/// rgb_from_hsi(&hsi, &mut back).unwrap();
///
/// assert_eq!(back.color_space(), ColorSpace::Rgb);
/// for (a, b) in back.as_slice().iter().zip(rgb.as_slice()) {
///     assert!((a - b).abs() < 1e-6);
/// }
/// ```
pub fn rgb_from_hsi<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + FloatConst + Send + Sync,
{
    rgb_from_hsi_with(src, dst, &HsiConfig::default())
}

/// Convert an HSI image to an RGB image with the given configuration.
///
/// See [`rgb_from_hsi`].
pub fn rgb_from_hsi_with<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    config: &HsiConfig,
) -> Result<(), ImageError>
where
    T: Float + FloatConst + Send + Sync,
{
    check_channels::<C>()?;
    src.color_space().expect(ColorSpace::Hsi)?;
    check_size(src, dst)?;

    let epsilon = cast_epsilon::<T>(config.epsilon)?;

    parallel::iter_pixels_with(config.strategy, src, dst, |src_pixel, dst_pixel| {
        let rgb = rgb_from_hsi_pixel(src_pixel[0], src_pixel[1], src_pixel[2], epsilon);
        dst_pixel[..3].copy_from_slice(&rgb);
        dst_pixel[3..].copy_from_slice(&src_pixel[3..]);
    });

    dst.set_color_space(ColorSpace::Rgb);

    Ok(())
}

/// Map an HSI image to displayable channels.
///
/// The hue is divided by `2π` so every channel lands in `[0, 1]` and the three
/// planes can be written out or uploaded like an ordinary RGB image. The result
/// is tagged [`ColorSpace::Rgb`] because that is how a display reads it; it is
/// not a color-accurate conversion.
///
/// # Errors
///
/// Fails if the input is not tagged [`ColorSpace::Hsi`] or has a channel count
/// other than 3 or 4.
pub fn hsi_preview<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Float + FloatConst + Send + Sync,
{
    hsi_preview_with(src, &HsiConfig::default())
}

/// Map an HSI image to displayable channels with the given configuration.
///
/// Only the execution strategy of `config` is used. See [`hsi_preview`].
pub fn hsi_preview_with<T, const C: usize>(
    src: &Image<T, C>,
    config: &HsiConfig,
) -> Result<Image<T, C>, ImageError>
where
    T: Float + FloatConst + Send + Sync,
{
    check_channels::<C>()?;
    src.color_space().expect(ColorSpace::Hsi)?;

    let two_pi = (T::one() + T::one()) * T::PI();
    let mut dst = Image::from_size_val(src.size(), T::zero())?;

    parallel::iter_pixels_with(config.strategy, src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0] / two_pi;
        dst_pixel[1..].copy_from_slice(&src_pixel[1..]);
    });

    Ok(dst)
}

/// Allocating RGB <-> HSI converter.
///
/// Each call reads the source, allocates one destination of the same size and
/// channel count, and returns it. The source is never modified, so a converter
/// can be shared across threads and called concurrently.
///
/// # Example
///
/// ```
/// use tinct_image::{ColorSpace, Image, ImageSize};
/// use tinct_imgproc::color::HsiConverter;
///
/// let rgb = Image::<f32, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![1.0, 0.0, 0.0],
/// )
/// .unwrap();
///
/// let converter = HsiConverter::default();
/// let hsi = converter.to_hsi(&rgb).unwrap();
/// let back = converter.to_rgb(&hsi).unwrap();
///
/// assert_eq!(hsi.color_space(), ColorSpace::Hsi);
/// assert_eq!(back.color_space(), ColorSpace::Rgb);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HsiConverter {
    config: HsiConfig,
}

impl HsiConverter {
    /// Create a converter with the given configuration.
    pub fn new(config: HsiConfig) -> Self {
        Self { config }
    }

    /// The configuration used by this converter.
    pub fn config(&self) -> &HsiConfig {
        &self.config
    }

    /// Convert an RGB(A) image into a newly allocated HSI(A) image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidColorSpace`] if the source is not RGB.
    pub fn to_hsi<T, const C: usize>(&self, src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
    where
        T: Float + FloatConst + Send + Sync,
    {
        log::debug!(
            "converting {}x{}x{} image from {} to HSI ({:?})",
            src.width(),
            src.height(),
            C,
            src.color_space(),
            self.config.strategy
        );

        let mut dst = Image::from_size_val(src.size(), T::zero())?;
        hsi_from_rgb_with(src, &mut dst, &self.config)?;
        Ok(dst)
    }

    /// Convert an HSI(A) image into a newly allocated RGB(A) image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidColorSpace`] if the source is not HSI.
    pub fn to_rgb<T, const C: usize>(&self, src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
    where
        T: Float + FloatConst + Send + Sync,
    {
        log::debug!(
            "converting {}x{}x{} image from {} to RGB ({:?}, epsilon {})",
            src.width(),
            src.height(),
            C,
            src.color_space(),
            self.config.strategy,
            self.config.epsilon
        );

        let mut dst = Image::from_size_val(src.size(), T::zero())?;
        rgb_from_hsi_with(src, &mut dst, &self.config)?;
        Ok(dst)
    }

    /// Map an HSI(A) image to displayable channels. See [`hsi_preview`].
    pub fn preview<T, const C: usize>(
        &self,
        src: &Image<T, C>,
    ) -> Result<Image<T, C>, ImageError>
    where
        T: Float + FloatConst + Send + Sync,
    {
        hsi_preview_with(src, &self.config)
    }
}
