#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image flipping module.
pub mod flip;

/// module containing parallization utilities.
pub mod parallel;
