//! # Image Codec
//!
//! Boundary between files on disk and [`PixelBuffer`]. The processing
//! operations never touch the filesystem; callers go through an
//! [`ImageCodec`] to load covers and save results.
//!
//! [`FileCodec`] is backed by the `image` crate: any format it can decode is
//! accepted on load (alpha is dropped), and the output format on save follows
//! the file extension.

use image::{ImageError, RgbImage};
use log::debug;
use std::path::Path;

use crate::common::error::{PixelError, Result};
use crate::common::pixels::PixelBuffer;

/// Load and save pixel buffers.
pub trait ImageCodec {
    /// # Errors
    /// - `Io` if the file cannot be read
    /// - `Decode` if the contents are not a supported image
    fn load(&self, path: &Path) -> Result<PixelBuffer>;

    /// # Errors
    /// - `Io` if the file cannot be written
    /// - `Encode` if the buffer cannot be written in the format implied by `path`
    fn save(&self, buffer: &PixelBuffer, path: &Path) -> Result<()>;
}

/// [`ImageCodec`] reading and writing real image files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileCodec;

impl FileCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for FileCodec {
    fn load(&self, path: &Path) -> Result<PixelBuffer> {
        let img = image::open(path).map_err(|e| match e {
            ImageError::IoError(io) => PixelError::Io(io),
            other => PixelError::Decode(format!("{}: {}", path.display(), other)),
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        debug!("Loaded {} ({}x{})", path.display(), width, height);

        PixelBuffer::from_raw(width as usize, height as usize, rgb.into_raw())
    }

    fn save(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        let width = u32::try_from(buffer.width())
            .map_err(|_| PixelError::Encode(format!("width {} too large", buffer.width())))?;
        let height = u32::try_from(buffer.height())
            .map_err(|_| PixelError::Encode(format!("height {} too large", buffer.height())))?;

        let img = RgbImage::from_raw(width, height, buffer.as_raw().to_vec())
            .ok_or_else(|| PixelError::Encode("buffer does not match its dimensions".to_string()))?;

        img.save(path).map_err(|e| match e {
            ImageError::IoError(io) => PixelError::Io(io),
            other => PixelError::Encode(format!("{}: {}", path.display(), other)),
        })?;

        debug!("Saved {} ({}x{})", path.display(), width, height);
        Ok(())
    }
}

/// Whether saving to `path` preserves every byte of the buffer.
///
/// Hidden letters survive only lossless formats.
pub fn is_lossless(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    !matches!(ext.as_deref(), Some("jpg") | Some("jpeg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_lossless() {
        assert!(is_lossless(Path::new("out/hidden.png")));
        assert!(is_lossless(Path::new("hidden.BMP")));
        assert!(!is_lossless(Path::new("hidden.jpg")));
        assert!(!is_lossless(Path::new("hidden.JPEG")));
    }
}
