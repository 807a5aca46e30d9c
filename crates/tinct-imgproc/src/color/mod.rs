mod hsi;

pub use hsi::{
    hsi_from_rgb, hsi_from_rgb_pixel, hsi_from_rgb_with, hsi_preview, hsi_preview_with,
    rgb_from_hsi, rgb_from_hsi_pixel, rgb_from_hsi_with, HsiConfig, HsiConverter, HSI_EPSILON,
};
