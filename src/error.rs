//! # Codec Errors
//!
//! The domain failures the LSB codec can report. Everything above the codec
//! (image loading, configuration, binaries) works with `anyhow::Result` and
//! wraps these transparently.

use thiserror::Error;

/// Result alias used by the codec.
pub type Result<T> = std::result::Result<T, StegoError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StegoError {
    /// The payload (message plus terminator) needs more bit slots than the
    /// buffer's R, G and B channels provide. Nothing was written.
    #[error("Message is too long for this image: need {required} bits but only have {available} bits available")]
    Capacity { required: usize, available: usize },

    /// No checkpoint of the LSB scan ever ended with the terminator.
    #[error("No hidden message found")]
    NotFound,

    /// The byte length does not match `width * height * 4`.
    #[error("Invalid pixel buffer: {width}x{height} RGBA needs {expected} bytes, got {len}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        expected: usize,
        len: usize,
    },

    /// A message character does not fit in one 8-bit code unit.
    #[error("Unsupported character {ch:?} at position {index}: only code points up to U+00FF can be hidden")]
    UnsupportedCharacter { ch: char, index: usize },
}
