use std::path::Path;

use tinct_image::{ops::cast_and_scale, ColorSpace, Image, ImageSize};

use crate::error::IoError;

/// Reads an RGB image from the given file path.
///
/// The method reads from any image format supported by the image crate and
/// normalizes the samples to `[0, 1]`. Alpha, if present in the file, is dropped.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A 3-channel `f32` image tagged [`ColorSpace::Rgb`].
pub fn read_image_rgbf32(file_path: impl AsRef<Path>) -> Result<Image<f32, 3>, IoError> {
    let img = decode_any(file_path.as_ref())?.into_rgb8();
    normalize(img.width(), img.height(), img.into_raw())
}

/// Reads an RGBA image from the given file path.
///
/// Files without an alpha channel get a fully opaque one.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A 4-channel `f32` image tagged [`ColorSpace::Rgb`].
pub fn read_image_rgbaf32(file_path: impl AsRef<Path>) -> Result<Image<f32, 4>, IoError> {
    let img = decode_any(file_path.as_ref())?.into_rgba8();
    normalize(img.width(), img.height(), img.into_raw())
}

/// Writes an RGB image to the given file path.
///
/// Samples are clamped to `[0, 1]` and quantized to 8 bits. The format is
/// picked from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output file.
/// * `src` - The image to write, tagged [`ColorSpace::Rgb`].
pub fn write_image_rgb8(file_path: impl AsRef<Path>, src: &Image<f32, 3>) -> Result<(), IoError> {
    write_impl(file_path.as_ref(), src, image::ExtendedColorType::Rgb8)
}

/// Writes an RGBA image to the given file path.
///
/// See [`write_image_rgb8`].
pub fn write_image_rgba8(
    file_path: impl AsRef<Path>,
    src: &Image<f32, 4>,
) -> Result<(), IoError> {
    write_impl(file_path.as_ref(), src, image::ExtendedColorType::Rgba8)
}

fn decode_any(file_path: &Path) -> Result<image::DynamicImage, IoError> {
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::open(file_path)?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img)
}

fn normalize<const C: usize>(
    width: u32,
    height: u32,
    buf: Vec<u8>,
) -> Result<Image<f32, C>, IoError> {
    let size = ImageSize {
        width: width as usize,
        height: height as usize,
    };

    let image_u8 = Image::<u8, C>::new(size, buf)?;
    let mut image_f32 = Image::<f32, C>::from_size_val(size, 0.0)?;
    cast_and_scale(&image_u8, &mut image_f32, 1.0 / 255.0)?;

    Ok(image_f32)
}

fn write_impl<const C: usize>(
    file_path: &Path,
    src: &Image<f32, C>,
    color_type: image::ExtendedColorType,
) -> Result<(), IoError> {
    src.color_space().expect(ColorSpace::Rgb)?;
    let [width, height]: [u32; 2] = src.size().try_into()?;

    let buf = src
        .as_slice()
        .iter()
        .map(|&x| (x.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect::<Vec<_>>();

    image::save_buffer(file_path, &buf, width, height, color_type)?;

    log::debug!("wrote {} ({}x{})", file_path.display(), width, height);

    Ok(())
}
