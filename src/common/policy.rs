//! # Input Policy
//!
//! Limits applied to user input before it reaches the codec. These are
//! front-end rules, not codec invariants: the codec itself accepts any
//! message that fits.

use thiserror::Error;

use super::config::LimitsConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Please provide both an image and a message to hide.")]
    EmptyMessage,

    #[error("Message is {len} characters, the limit is {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("File is too large. Maximum size is {max} bytes, got {size}.")]
    UploadTooLarge { size: usize, max: usize },

    #[error("Invalid file type {0}. Please use: {1}")]
    UnsupportedType(String, String),
}

/// Check a message against the configured limits.
///
/// Blank messages (empty or whitespace only) are refused. The length limit
/// counts characters, not bytes.
pub fn check_message(message: &str, limits: &LimitsConfig) -> Result<(), PolicyError> {
    if message.trim().is_empty() {
        return Err(PolicyError::EmptyMessage);
    }

    let len = message.chars().count();
    if len > limits.max_message_chars {
        return Err(PolicyError::MessageTooLong {
            len,
            max: limits.max_message_chars,
        });
    }

    Ok(())
}

/// Check an uploaded image's content type, when known, then its size.
pub fn check_upload(
    size: usize,
    content_type: Option<&str>,
    limits: &LimitsConfig,
) -> Result<(), PolicyError> {
    if let Some(content_type) = content_type {
        if !limits.accepted_types.iter().any(|t| t == content_type) {
            return Err(PolicyError::UnsupportedType(
                content_type.to_string(),
                limits.accepted_types.join(", "),
            ));
        }
    }

    if size > limits.max_upload_bytes {
        return Err(PolicyError::UploadTooLarge {
            size,
            max: limits.max_upload_bytes,
        });
    }

    Ok(())
}
