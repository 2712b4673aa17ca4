//! # lsb-stego
//!
//! Hide text in the least significant bits of an image's color channels and
//! read it back.
//!
//! - [`codec`]: the pure pixel-buffer encoder and decoder
//! - [`processing`]: image file/bytes pipeline (any input format, PNG output)
//! - [`common`]: configuration and input limits
//! - [`web`]: HTTP API
//! - [`utils`]: logging setup for the binaries

pub mod codec;
pub mod common;
pub mod error;
pub mod processing;
pub mod utils;
pub mod web;

pub use codec::{decode, encode, PixelBuffer, TERMINATOR};
pub use error::{Result, StegoError};
