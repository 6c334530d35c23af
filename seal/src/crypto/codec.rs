//! # Codec
//!
//! Byte arrays in, ASCII out, and back again. Keys and signatures leave the
//! engine as standard base64 (RFC 4648 alphabet, `=` padding) because that's
//! what survives copy/paste, JSON, and clipboards without surprises.
//!
//! Decoding is strict. The `STANDARD` engine from the `base64` crate rejects
//! non-alphabet characters, missing or surplus padding, and non-zero
//! trailing bits, so every byte string has exactly one accepted text form.
//! Runtime is linear in the input length, adversarial input included.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::error::CodecError;

/// Encode bytes as padded standard base64. The empty slice encodes to `""`.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode padded standard base64 back into bytes.
///
/// `""` decodes to an empty vector.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(STANDARD.decode(text)?)
}

/// Decode base64 and require exactly `N` bytes.
///
/// Returns `Ok(None)` when the text is valid base64 but the wrong length,
/// so callers can tell the two failures apart when they care to.
pub fn decode_exact<const N: usize>(text: &str) -> Result<Option<[u8; N]>, CodecError> {
    let bytes = decode(text)?;
    Ok(<[u8; N]>::try_from(bytes.as_slice()).ok())
}
