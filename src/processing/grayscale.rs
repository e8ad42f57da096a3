//! Luma conversion using the ITU-R BT.601 weights.

use log::debug;

use crate::common::pixels::PixelBuffer;

const RED_WEIGHT: f64 = 0.299;
const GREEN_WEIGHT: f64 = 0.587;
const BLUE_WEIGHT: f64 = 0.114;

/// Gray level of one pixel, truncated toward zero.
pub fn luma([r, g, b]: [u8; 3]) -> u8 {
    let value = RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b);
    // Float-to-int `as` truncates and saturates, never wraps.
    value as u8
}

/// Return a gray copy of `buffer` with the luma replicated into R, G and B.
pub fn grayscale(buffer: &PixelBuffer) -> PixelBuffer {
    debug!("Converting {}x{} buffer to grayscale", buffer.width(), buffer.height());

    let mut gray = PixelBuffer::new(buffer.width(), buffer.height());
    for (x, y, rgb) in buffer.enumerate_pixels() {
        let level = luma(rgb);
        gray.put_pixel(x, y, [level; 3]);
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_reference_values() {
        assert_eq!(luma([0, 0, 0]), 0);
        assert_eq!(luma([255, 255, 255]), 255);
        assert_eq!(luma([255, 0, 0]), 76);
        assert_eq!(luma([0, 255, 0]), 149);
        assert_eq!(luma([0, 0, 255]), 29);
    }

    #[test]
    fn test_channels_equal() {
        let mut buf = PixelBuffer::new(2, 1);
        buf.put_pixel(0, 0, [200, 100, 50]);
        buf.put_pixel(1, 0, [12, 240, 7]);

        let gray = grayscale(&buf);

        assert_eq!(gray.pixel(0, 0), [124; 3]);
        for (_, _, [r, g, b]) in gray.enumerate_pixels() {
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
        // Source left alone.
        assert_eq!(buf.pixel(0, 0), [200, 100, 50]);
    }
}
