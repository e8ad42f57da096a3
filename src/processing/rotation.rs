//! # Quarter-Turn Rotation
//!
//! Rotates a [`PixelBuffer`] by exactly +90° (clockwise) or -90°
//! (counter-clockwise) by remapping every pixel into a freshly allocated
//! buffer with width and height swapped.
//!
//! For a source with `H` rows and `W` columns, the pixel at row `i`, column `j`
//! lands at:
//!
//! ```text
//! +90  ->  row j,         column H - 1 - i
//! -90  ->  row W - 1 - j, column i
//! ```
//!
//! The two mappings are inverses, so rotating one way and then the other
//! restores the original buffer exactly.

use log::debug;
use std::fmt;

use crate::common::error::{PixelError, Result};
use crate::common::pixels::PixelBuffer;

/// Direction of a quarter turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// +90 degrees.
    Clockwise,
    /// -90 degrees.
    CounterClockwise,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::Clockwise => 90,
            Rotation::CounterClockwise => -90,
        }
    }

    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = PixelError;

    fn try_from(angle: i32) -> Result<Self> {
        match angle {
            90 => Ok(Rotation::Clockwise),
            -90 => Ok(Rotation::CounterClockwise),
            other => Err(PixelError::InvalidArgument(format!(
                "rotation angle must be 90 or -90, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Rotate `buffer` by `angle` degrees.
///
/// # Errors
/// - `InvalidArgument` if `angle` is anything other than `90` or `-90`.
///   Nothing is allocated in that case.
pub fn rotate(buffer: &PixelBuffer, angle: i32) -> Result<PixelBuffer> {
    let rotation = Rotation::try_from(angle)?;
    Ok(rotate_quarter(buffer, rotation))
}

/// Infallible form of [`rotate`] for an already validated direction.
pub fn rotate_quarter(buffer: &PixelBuffer, rotation: Rotation) -> PixelBuffer {
    let height = buffer.height();
    let width = buffer.width();
    debug!("Rotating {}x{} buffer by {}", width, height, rotation);

    let mut rotated = PixelBuffer::new(height, width);

    for i in 0..height {
        for j in 0..width {
            let (row, col) = match rotation {
                Rotation::Clockwise => (j, height - 1 - i),
                Rotation::CounterClockwise => (width - 1 - j, i),
            };
            rotated.put_pixel(col, row, buffer.pixel(j, i));
        }
    }

    rotated
}
