//! # LSB Text Codec
//!
//! Hides text in the least significant bit of the R, G and B channels of an
//! RGBA pixel buffer and reads it back.
//!
//! ## Format
//!
//! The message is followed by the literal terminator `||END||`. Each character
//! becomes 8 bits, most significant first, written into channels in the order
//! R, G, B of pixel 0, then pixel 1, and so on. Alpha is never touched and no
//! length is stored, so the decoder finds the end by looking for the terminator.
//!
//! ### Capacity
//! A buffer holds `3 * width * height` bits, i.e. `3 * width * height / 8 - 7`
//! message characters once the terminator is accounted for.
//!
//! The codec is pure and synchronous. Decoding image files into pixel buffers
//! is the job of [`crate::processing`].

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod pixels;

pub use bits::{deserialize, serialize};
pub use decoder::decode;
pub use encoder::{encode, encode_in_place};
pub use pixels::PixelBuffer;

/// Sentinel appended to every message. Fixed for wire compatibility.
pub const TERMINATOR: &str = "||END||";

/// Longest message (in characters) that fits in `pixels` next to the terminator.
pub fn max_message_chars(pixels: &PixelBuffer) -> usize {
    (pixels.capacity_bits() / bits::BITS_PER_CHAR).saturating_sub(TERMINATOR.len())
}
