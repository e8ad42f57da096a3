//! # Error Types
//!
//! Every fallible library operation returns [`Result`], whose error is the
//! single [`PixelError`] enum. Argument checks run before any buffer is
//! allocated or written, so a returned error never leaves partial output.

use thiserror::Error;

/// Errors produced by the pixel operations, the codec and config loading.
#[derive(Debug, Error)]
pub enum PixelError {
    /// A caller-supplied argument is outside the accepted domain
    /// (rotation angle, extraction length, buffer shape).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The encoded message holds more letters than the image has pixels.
    #[error("message too long: {required} letters but the image only holds {capacity}")]
    MessageTooLong { required: usize, capacity: usize },

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The buffer could not be encoded into the requested format.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// The configuration file is missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PixelError>;
