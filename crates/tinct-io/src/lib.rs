#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// Decodes any format supported by the `image` crate into normalized `f32`
/// buffers and encodes them back to 8-bit files.
pub mod functional;

pub use crate::error::IoError;
