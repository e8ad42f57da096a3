//! # Pixel Buffer
//!
//! Dense RGB image storage shared by every operation in the crate.
//!
//! ## Layout
//!
//! Pixels are addressed as `(x, y)` where `x` is the column in `0..width` and
//! `y` is the row in `0..height`. Bytes are stored row-major, three per pixel:
//!
//! ```text
//! data[(y * width + x) * 3 + channel]    channel: 0 = R, 1 = G, 2 = B
//! ```
//!
//! This is the same layout as `image::RgbImage`, so conversion to and from the
//! codec is a move of the underlying `Vec<u8>`.

use crate::common::error::{PixelError, Result};

/// Number of channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Index of the red channel.
pub const RED: usize = 0;

/// An owned grid of RGB byte triples.
///
/// Cloning allocates fresh storage; two buffers never alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a black image (all channels zero).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Wrap existing row-major RGB bytes.
    ///
    /// # Errors
    /// - `InvalidArgument` if `data.len() != width * height * 3` or the
    ///   dimensions overflow `usize`
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or_else(|| {
                PixelError::InvalidArgument(format!("{}x{} RGB buffer is too large", width, height))
            })?;
        if data.len() != expected {
            return Err(PixelError::InvalidArgument(format!(
                "{}x{} RGB buffer needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels, which is also the number of letters `hide` can store.
    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    /// Whether both buffers have the same width and height.
    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        (y * self.width + x) * CHANNELS
    }

    /// RGB triple at column `x`, row `y`.
    ///
    /// Panics if the coordinate is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, rgb: [u8; CHANNELS]) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    pub fn red(&self, x: usize, y: usize) -> u8 {
        self.data[self.offset(x, y) + RED]
    }

    pub(crate) fn red_mut(&mut self, x: usize, y: usize) -> &mut u8 {
        let i = self.offset(x, y) + RED;
        &mut self.data[i]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over `(x, y, rgb)` in storage order.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, [u8; CHANNELS])> + '_ {
        let width = self.width;
        self.data
            .chunks_exact(CHANNELS)
            .enumerate()
            .map(move |(i, px)| (i % width, i / width, [px[0], px[1], px[2]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.capacity(), 12);
        assert_eq!(buf.as_raw().len(), 36);
        assert!(buf.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(err, PixelError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_raw_rejects_overflowing_dimensions() {
        let err = PixelBuffer::from_raw(usize::MAX, 2, Vec::new()).unwrap_err();
        assert!(matches!(err, PixelError::InvalidArgument(_)));

        let err = PixelBuffer::from_raw(usize::MAX / 2, 1, Vec::new()).unwrap_err();
        assert!(matches!(err, PixelError::InvalidArgument(_)));
    }

    #[test]
    fn test_row_major_layout() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.put_pixel(2, 1, [10, 20, 30]);

        // Last pixel of the second row.
        assert_eq!(&buf.as_raw()[15..18], &[10, 20, 30]);
        assert_eq!(buf.pixel(2, 1), [10, 20, 30]);
        assert_eq!(buf.red(2, 1), 10);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let original = PixelBuffer::new(2, 2);
        let mut copy = original.clone();
        *copy.red_mut(0, 0) = 99;

        assert_eq!(original.red(0, 0), 0);
        assert_eq!(copy.red(0, 0), 99);
    }

    #[test]
    fn test_enumerate_pixels_coordinates() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.put_pixel(1, 0, [1, 1, 1]);
        buf.put_pixel(0, 1, [2, 2, 2]);

        let coords: Vec<_> = buf.enumerate_pixels().collect();
        assert_eq!(
            coords,
            vec![
                (0, 0, [0, 0, 0]),
                (1, 0, [1, 1, 1]),
                (0, 1, [2, 2, 2]),
                (1, 1, [0, 0, 0]),
            ]
        );
    }
}
