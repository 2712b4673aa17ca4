//! # Image Processing
//!
//! Bridges encoded image files and the pixel-buffer codec: decodes uploads
//! into RGBA buffers and writes results back out as lossless PNG.

pub mod steganography;

// Re-export main functions for convenience
pub use steganography::{
    embed_file, embed_text_bytes, encode_png, extract_file, extract_text_bytes, load_pixels,
};
