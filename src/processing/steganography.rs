//! # Red-Channel Letter Steganography
//!
//! Hides an alphabetic message in an image by adding each letter's alphabet
//! position to the red channel of one pixel, and recovers it by subtracting
//! the untouched original from the modified copy.
//!
//! ## Algorithm
//!
//! ### Encoding
//! 1. Uppercase the text and keep only `A`–`Z`
//! 2. Map each letter to its position: `A` → 0 … `Z` → 25
//!
//! ### Hiding
//! 1. Reject the message if it has more letters than the image has pixels
//! 2. Clone the cover image
//! 3. For letter `i`, pick the pixel `x = i / height`, `y = i % height`
//!    (fill down the first column, then the next one)
//! 4. Add the letter value to that pixel's red byte, wrapping at 256
//!
//! ### Extraction
//! 1. Walk the same pixel order for the requested number of letters
//! 2. `diff = modified.red - original.red`, wrapping at 256
//! 3. Letter = `'A' + diff`
//!
//! Wrapping on both sides keeps the scheme invertible even when a red byte
//! overflows past 255.
//!
//! ### Capacity
//! One letter per pixel: a 640x480 image can carry 307 200 letters.
//!
//! The message length is not stored in the image. Asking for more letters
//! than were hidden reads zero differences, which decode as `'A'`.

use log::debug;

use crate::common::error::{PixelError, Result};
use crate::common::pixels::PixelBuffer;

const ALPHABET_START: u8 = b'A';

/// Convert text to alphabet positions, dropping every non-letter.
///
/// Uppercasing is full Unicode case mapping, so `ß` becomes `SS` and the
/// dotless `ı` becomes `I` before the `A`–`Z` filter runs.
///
/// # Example
/// ```
/// use pixel_hide::encode_message;
///
/// assert_eq!(encode_message("Hack!23"), vec![7, 0, 2, 10]);
/// ```
pub fn encode_message(text: &str) -> Vec<u8> {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .map(|c| c as u8 - ALPHABET_START)
        .collect()
}

/// Pixel holding letter `index`, filling down each column first.
fn slot(index: usize, height: usize) -> (usize, usize) {
    (index / height, index % height)
}

fn letter_for(diff: u8) -> char {
    // 'A' + 255 is still a valid scalar value.
    char::from_u32(u32::from(ALPHABET_START) + u32::from(diff)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Hide `text` in a copy of `buffer`.
///
/// # Arguments
/// - `buffer`: cover image, left unmodified
/// - `text`: message; only its letters are kept, case-folded to uppercase
///
/// # Returns
/// - `Ok(PixelBuffer)`: a new buffer whose red channel carries the letters
///
/// # Errors
/// - `MessageTooLong` if the message has more letters than `buffer` has pixels
///
/// # Example
/// ```
/// use pixel_hide::{extract, hide, PixelBuffer};
///
/// let cover = PixelBuffer::new(4, 4);
/// let stego = hide(&cover, "hack")?;
/// assert_eq!(extract(&cover, &stego, 4)?, "HACK");
/// # Ok::<(), pixel_hide::PixelError>(())
/// ```
pub fn hide(buffer: &PixelBuffer, text: &str) -> Result<PixelBuffer> {
    let values = encode_message(text);
    let capacity = buffer.capacity();

    if values.len() > capacity {
        return Err(PixelError::MessageTooLong {
            required: values.len(),
            capacity,
        });
    }

    debug!(
        "Hiding {} letters in {}x{} buffer (capacity {})",
        values.len(),
        buffer.width(),
        buffer.height(),
        capacity
    );

    let mut modified = buffer.clone();
    let height = buffer.height();

    for (i, value) in values.into_iter().enumerate() {
        let (x, y) = slot(i, height);
        let red = modified.red_mut(x, y);
        *red = red.wrapping_add(value);
    }

    Ok(modified)
}

/// Recover `length` letters by differencing the red channels of two buffers.
///
/// # Errors
/// - `InvalidArgument` if the buffers differ in size or `length` exceeds the
///   pixel count
pub fn extract(original: &PixelBuffer, modified: &PixelBuffer, length: usize) -> Result<String> {
    if !original.same_dimensions(modified) {
        return Err(PixelError::InvalidArgument(format!(
            "buffers differ in size: {}x{} vs {}x{}",
            original.width(),
            original.height(),
            modified.width(),
            modified.height()
        )));
    }

    if length > original.capacity() {
        return Err(PixelError::InvalidArgument(format!(
            "cannot extract {} letters from an image of {} pixels",
            length,
            original.capacity()
        )));
    }

    let height = original.height();
    let message: String = (0..length)
        .map(|i| {
            let (x, y) = slot(i, height);
            letter_for(modified.red(x, y).wrapping_sub(original.red(x, y)))
        })
        .collect();

    debug!("Extracted {} letters", length);
    Ok(message)
}
