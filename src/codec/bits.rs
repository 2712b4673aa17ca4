//! # Bit (De)serialization
//!
//! Converts text to and from the bitstream that gets spread over channel LSBs.
//! Every character occupies exactly one 8-bit code unit, most significant bit
//! first, with no separators between characters.

/// Number of bits each character occupies in the bitstream.
pub const BITS_PER_CHAR: usize = 8;

/// Convert `text` into its bitstream, 8 bits per character, MSB first.
///
/// The output length is always `8 * text.chars().count()`.
///
/// Code points above U+00FF are masked to their low 8 bits. That is lossy: such
/// a character will not survive a round trip. [`encode`](super::encode) rejects
/// those characters before they ever reach this function.
pub fn serialize(text: &str) -> Vec<bool> {
    let mut bits = Vec::with_capacity(text.chars().count() * BITS_PER_CHAR);

    for ch in text.chars() {
        let code = (ch as u32 & 0xFF) as u8;
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((code >> shift) & 1 == 1);
        }
    }

    bits
}

/// Convert a bitstream back into text, 8 bits per character.
///
/// A trailing group shorter than 8 bits is dropped. Each full group becomes the
/// character with that code point (U+0000 to U+00FF), so this never fails.
pub fn deserialize(bits: &[bool]) -> String {
    bits.chunks_exact(BITS_PER_CHAR).map(bits_to_char).collect()
}

/// Fold one group of 8 bits (MSB first) into its Latin-1 character.
pub(crate) fn bits_to_char(group: &[bool]) -> char {
    let byte = group
        .iter()
        .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
    char::from(byte)
}
