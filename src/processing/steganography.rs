//! # Image Steganography Pipeline
//!
//! File- and byte-level entry points around [`crate::codec`].
//!
//! ### Encoding Process
//! 1. Decode the input image (any format the `image` crate reads) and convert to RGBA8
//! 2. Hide the text with [`codec::encode`]
//! 3. Write the modified pixels as PNG
//!
//! ### Decoding Process
//! 1. Decode the image and convert to RGBA8
//! 2. Recover the text with [`codec::decode`]
//!
//! The output is always PNG. Any lossy re-encoding (JPEG, WebP lossy) destroys
//! the hidden bits.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use log::info;

use crate::codec::{self, PixelBuffer};

impl From<RgbaImage> for PixelBuffer {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        // RgbaImage always holds width * height * 4 bytes.
        PixelBuffer::from_raw_parts(width, height, img.into_raw())
    }
}

impl TryFrom<PixelBuffer> for RgbaImage {
    type Error = anyhow::Error;

    fn try_from(pixels: PixelBuffer) -> Result<Self> {
        let (width, height) = (pixels.width(), pixels.height());
        RgbaImage::from_raw(width, height, pixels.into_bytes())
            .ok_or_else(|| anyhow::anyhow!("Pixel buffer does not match {}x{}", width, height))
    }
}

/// Decode image bytes into an RGBA pixel buffer.
///
/// # Errors
/// The bytes are not an image format supported by the `image` crate.
pub fn load_pixels(image_bytes: &[u8]) -> Result<PixelBuffer> {
    let img = image::load_from_memory(image_bytes).context("Failed to load image")?;
    Ok(PixelBuffer::from(img.to_rgba8()))
}

/// Encode a pixel buffer as PNG bytes.
pub fn encode_png(pixels: PixelBuffer) -> Result<Vec<u8>> {
    let img = RgbaImage::try_from(pixels)?;

    let mut output_bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut output_bytes), ImageFormat::Png)
        .context("Failed to encode PNG")?;

    Ok(output_bytes)
}

/// Hide `text` in an image and return the result as PNG bytes.
///
/// # Arguments
/// - `image_bytes`: Raw bytes of the carrier image (JPEG, PNG, GIF, WebP, ...)
/// - `text`: Message to hide, Latin-1 characters only
///
/// # Errors
/// - Image format is invalid
/// - Message is too long or has characters above U+00FF
///
/// # Example
/// ```ignore
/// let image_data = std::fs::read("input.jpg")?;
/// let encoded = embed_text_bytes(&image_data, "Secret message")?;
/// std::fs::write("output.png", encoded)?;
/// ```
pub fn embed_text_bytes(image_bytes: &[u8], text: &str) -> Result<Vec<u8>> {
    let pixels = load_pixels(image_bytes)?;
    let (width, height) = (pixels.width(), pixels.height());

    let encoded = codec::encode(pixels, text)?;
    let png = encode_png(encoded)?;

    info!(
        "Hid {} chars in {}x{} image ({} PNG bytes)",
        text.chars().count(),
        width,
        height,
        png.len()
    );
    Ok(png)
}

/// Recover the message hidden in an image.
///
/// # Errors
/// - Image format is invalid
/// - No hidden message found
pub fn extract_text_bytes(image_bytes: &[u8]) -> Result<String> {
    let pixels = load_pixels(image_bytes)?;
    let text = codec::decode(&pixels)?;

    info!("Recovered {} chars", text.chars().count());
    Ok(text)
}

/// Path variant of [`embed_text_bytes`]. Writes PNG regardless of `output`'s extension.
pub fn embed_file(input: impl AsRef<Path>, text: &str, output: impl AsRef<Path>) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let image_bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let png = embed_text_bytes(&image_bytes, text)?;
    std::fs::write(output, png)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}

/// Path variant of [`extract_text_bytes`].
pub fn extract_file(input: impl AsRef<Path>) -> Result<String> {
    let input = input.as_ref();
    let image_bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    extract_text_bytes(&image_bytes)
}
