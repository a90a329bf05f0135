//! Conversions between byte buffers and the textual encodings used at the
//! API boundary: UTF-8, standard padded Base64 and hex.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::{CryptoError, Result};

/// Encodes text as UTF-8 bytes.
pub fn utf8_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decodes UTF-8 bytes into a `String`.
///
/// # Errors
///
/// Returns [`CryptoError::Decoding`] if `bytes` is not valid UTF-8.
pub fn bytes_to_utf8(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| {
        CryptoError::Decoding(format!(
            "invalid UTF-8 at byte {}",
            e.utf8_error().valid_up_to()
        ))
    })
}

/// Decodes UTF-8 bytes, replacing invalid sequences with U+FFFD.
pub fn bytes_to_utf8_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub fn bytes_to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard (RFC 4648, padded) Base64.
///
/// # Errors
///
/// Returns [`CryptoError::Decoding`] on characters outside the alphabet or
/// incorrect padding.
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CryptoError::Decoding(format!("invalid base64: {e}")))
}

/// Encodes bytes as lowercase hex, two characters per byte.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decodes hex (either case) into bytes.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidInput`] if `text` has odd length, and
/// [`CryptoError::Decoding`] if it contains a non-hex character.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>> {
    // A misaligned byte boundary would shift every following byte.
    if text.len() % 2 != 0 {
        return Err(CryptoError::InvalidInput(format!(
            "hex string has odd length {}",
            text.len()
        )));
    }

    hex::decode(text).map_err(|e| CryptoError::Decoding(format!("invalid hex: {e}")))
}

/// Stateless handle grouping the codec functions, handed out by
/// [`crate::SimpleCrypto::utils`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Utils;

impl Utils {
    pub fn utf8_to_bytes(&self, text: &str) -> Vec<u8> {
        utf8_to_bytes(text)
    }

    pub fn bytes_to_utf8(&self, bytes: &[u8]) -> Result<String> {
        bytes_to_utf8(bytes)
    }

    pub fn bytes_to_utf8_lossy(&self, bytes: &[u8]) -> String {
        bytes_to_utf8_lossy(bytes)
    }

    pub fn bytes_to_base64(&self, bytes: &[u8]) -> String {
        bytes_to_base64(bytes)
    }

    pub fn base64_to_bytes(&self, text: &str) -> Result<Vec<u8>> {
        base64_to_bytes(text)
    }

    pub fn bytes_to_hex(&self, bytes: &[u8]) -> String {
        bytes_to_hex(bytes)
    }

    pub fn hex_to_bytes(&self, text: &str) -> Result<Vec<u8>> {
        hex_to_bytes(text)
    }
}
