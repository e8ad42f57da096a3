//! # Image Processing
//!
//! Pure operations on [`PixelBuffer`](crate::PixelBuffer). None of them
//! performs I/O or modifies its input; each returns newly allocated storage.
//!
//! - [`rotation`]: ±90° rotation by index remapping
//! - [`steganography`]: hiding and extracting letters in the red channel
//! - [`grayscale`]: BT.601 luma conversion

pub mod grayscale;
pub mod rotation;
pub mod steganography;

// Re-export main functions for convenience
pub use grayscale::grayscale;
pub use rotation::{rotate, rotate_quarter, Rotation};
pub use steganography::{encode_message, extract, hide};
