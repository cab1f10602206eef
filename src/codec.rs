//! Reversible UTF-8 text codec over standard base64.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodingError {
    #[error("Invalid base64 text: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Encodes the UTF-8 bytes of `text` as padded standard base64.
pub fn encode_text(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decodes padded standard base64 back into a UTF-8 string.
///
/// # Errors
///
/// Returns `DecodingError::Base64` for characters outside the standard
/// alphabet or wrong padding, and `DecodingError::Utf8` when the decoded
/// bytes are not UTF-8.
pub fn decode_text(encoded: &str) -> Result<String, DecodingError> {
    let bytes = STANDARD.decode(encoded)?;
    Ok(String::from_utf8(bytes)?)
}
