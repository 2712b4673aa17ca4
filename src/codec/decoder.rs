//! # LSB Decoder
//!
//! The payload length is not stored in the image, so the decoder reads channel
//! LSBs in the encoder's order and, at every byte boundary, checks whether the
//! text recovered so far ends with the terminator. The first match wins.
//!
//! A message that itself contains `||END||` is cut short at that occurrence.

use log::debug;

use super::bits::{bits_to_char, BITS_PER_CHAR};
use super::pixels::{PixelBuffer, CHANNELS, DATA_CHANNELS};
use super::TERMINATOR;
use crate::error::{Result, StegoError};

/// Recover the first terminator-delimited message hidden in `pixels`.
///
/// # Errors
/// [`StegoError::NotFound`] if the whole buffer is scanned without any
/// 8-bit-aligned prefix ending in the terminator.
pub fn decode(pixels: &PixelBuffer) -> Result<String> {
    let mut group = [false; BITS_PER_CHAR];
    let mut filled = 0;
    let mut text = String::new();

    for pixel in pixels.as_bytes().chunks_exact(CHANNELS) {
        for &channel in &pixel[..DATA_CHANNELS] {
            group[filled] = channel & 1 == 1;
            filled += 1;

            if filled == BITS_PER_CHAR {
                filled = 0;
                text.push(bits_to_char(&group));

                if text.ends_with(TERMINATOR) {
                    text.truncate(text.len() - TERMINATOR.len());
                    debug!("Found terminator after {} chars", text.chars().count());
                    return Ok(text);
                }
            }
        }
    }

    debug!(
        "Scanned {} bits of {}x{} image without finding a terminator",
        pixels.capacity_bits(),
        pixels.width(),
        pixels.height()
    );
    Err(StegoError::NotFound)
}
