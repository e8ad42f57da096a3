//! Grayscale conversion, quarter-turn rotation and red-channel letter
//! steganography on plain RGB pixel buffers.
//!
//! ```
//! use pixel_hide::{extract, hide, rotate, PixelBuffer};
//!
//! let cover = PixelBuffer::new(8, 6);
//! let rotated = rotate(&cover, 90)?;
//! assert_eq!((rotated.width(), rotated.height()), (6, 8));
//!
//! let stego = hide(&cover, "Hack!")?;
//! assert_eq!(extract(&cover, &stego, 4)?, "HACK");
//! # Ok::<(), pixel_hide::PixelError>(())
//! ```

pub mod codec;
pub mod common;
pub mod pipeline;
pub mod processing;

pub use codec::{FileCodec, ImageCodec};
pub use common::error::{PixelError, Result};
pub use common::pixels::PixelBuffer;
pub use processing::{encode_message, extract, grayscale, hide, rotate, Rotation};
