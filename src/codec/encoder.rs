//! # LSB Encoder
//!
//! Appends the terminator to the message, serializes it, and writes one bit
//! into the least significant bit of each R, G and B byte, pixel by pixel.
//! Alpha bytes and everything past the last written channel stay untouched.

use log::debug;

use super::bits::serialize;
use super::pixels::{PixelBuffer, CHANNELS, DATA_CHANNELS};
use super::TERMINATOR;
use crate::error::{Result, StegoError};

/// Hide `message` in `pixels` and return the modified buffer.
///
/// # Errors
/// - [`StegoError::UnsupportedCharacter`] if a character is above U+00FF
/// - [`StegoError::Capacity`] if message plus terminator needs more than
///   `3 * width * height` bits
///
/// No byte is changed when an error is returned.
///
/// # Example
/// ```
/// use lsb_stego::codec::{decode, encode, PixelBuffer};
///
/// let image = PixelBuffer::filled(100, 100, [0, 0, 0, 255]);
/// let encoded = encode(image, "ok").unwrap();
/// assert_eq!(decode(&encoded).unwrap(), "ok");
/// ```
pub fn encode(mut pixels: PixelBuffer, message: &str) -> Result<PixelBuffer> {
    encode_in_place(&mut pixels, message)?;
    Ok(pixels)
}

/// Same as [`encode`], writing into a borrowed buffer.
pub fn encode_in_place(pixels: &mut PixelBuffer, message: &str) -> Result<()> {
    if let Some((index, ch)) = message.chars().enumerate().find(|(_, c)| *c as u32 > 0xFF) {
        return Err(StegoError::UnsupportedCharacter { ch, index });
    }

    let mut payload = String::with_capacity(message.chars().count() + TERMINATOR.len());
    payload.push_str(message);
    payload.push_str(TERMINATOR);
    let bits = serialize(&payload);

    let available = pixels.capacity_bits();
    if bits.len() > available {
        return Err(StegoError::Capacity {
            required: bits.len(),
            available,
        });
    }

    let mut pending = bits.iter();
    'outer: for pixel in pixels.as_bytes_mut().chunks_exact_mut(CHANNELS) {
        // Only R, G, B. The alpha byte at index 3 is never written.
        for channel in pixel.iter_mut().take(DATA_CHANNELS) {
            let Some(&bit) = pending.next() else {
                break 'outer;
            };
            *channel = (*channel & 0xFE) | u8::from(bit);
        }
    }

    debug!(
        "Embedded {} bits ({} chars) into {}x{} image, capacity {} bits",
        bits.len(),
        message.chars().count(),
        pixels.width(),
        pixels.height(),
        available
    );

    Ok(())
}
