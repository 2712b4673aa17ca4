//! # Pixel Buffer
//!
//! Row-major, interleaved RGBA samples, 4 bytes per pixel. This is the only
//! shape of image data the codec understands.

use crate::error::{Result, StegoError};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Channels per pixel that carry hidden bits (R, G, B). Alpha is never used.
pub const DATA_CHANNELS: usize = 3;

/// A decoded RGBA image held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    /// [`StegoError::InvalidDimensions`] unless `data.len() == width * height * 4`.
    /// Dimensions whose byte length overflows `usize` are always rejected and
    /// reported with `expected == usize::MAX`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height);
        if expected != Some(data.len()) {
            return Err(StegoError::InvalidDimensions {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                len: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Caller guarantees `data.len() == width * height * 4`.
    pub(crate) fn from_raw_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(Some(data.len()), byte_len(width, height));
        Self {
            width,
            height,
            data,
        }
    }

    /// A buffer where every pixel is `rgba`.
    ///
    /// # Panics
    /// If `width * height * 4` bytes cannot be allocated.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = byte_len(width, height).unwrap_or(usize::MAX);
        let mut data = Vec::with_capacity(len);
        data.extend(rgba.iter().copied().cycle().take(len));
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Number of bits the buffer can hold: one per R, G and B channel.
    pub fn capacity_bits(&self) -> usize {
        self.data.len() / CHANNELS * DATA_CHANNELS
    }
}

/// `width * height * 4`, or `None` if that does not fit in `usize`.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());

        let err = PixelBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            StegoError::InvalidDimensions {
                width: 2,
                height: 2,
                expected: 16,
                len: 15
            }
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        for side in [1u32 << 31, u32::MAX] {
            let err = PixelBuffer::new(side, side, Vec::new()).unwrap_err();
            assert!(matches!(
                err,
                StegoError::InvalidDimensions { len: 0, .. }
            ));
        }
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len(3, 2), Some(24));
        assert_eq!(byte_len(0, u32::MAX), Some(0));
        assert_eq!(byte_len(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_empty_buffer_is_valid() {
        let empty = PixelBuffer::new(0, 10, Vec::new()).unwrap();
        assert_eq!(empty.capacity_bits(), 0);
    }

    #[test]
    fn test_filled_and_capacity() {
        let buffer = PixelBuffer::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(buffer.as_bytes().len(), 24);
        assert_eq!(&buffer.as_bytes()[4..8], &[1, 2, 3, 4]);
        assert_eq!(buffer.capacity_bits(), 18);
    }
}
