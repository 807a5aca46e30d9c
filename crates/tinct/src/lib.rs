//! RGB and HSI color space conversion for floating point image buffers.
//!
//! ```
//! use tinct::image::{ColorSpace, Image, ImageSize};
//! use tinct::imgproc::color::HsiConverter;
//!
//! let rgb = Image::<f32, 4>::new(
//!     ImageSize {
//!         width: 1,
//!         height: 1,
//!     },
//!     vec![0.2, 0.4, 0.6, 1.0],
//! )
//! .unwrap();
//!
//! let converter = HsiConverter::default();
//! let hsi = converter.to_hsi(&rgb).unwrap();
//! let back = converter.to_rgb(&hsi).unwrap();
//!
//! assert_eq!(hsi.color_space(), ColorSpace::Hsi);
//! assert_eq!(back.as_slice()[3], 1.0);
//! ```

#[doc(inline)]
pub use tinct_image as image;

#[doc(inline)]
pub use tinct_imgproc as imgproc;

#[doc(inline)]
pub use tinct_io as io;
