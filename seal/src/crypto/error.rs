//! Error types for the cryptographic core.
//!
//! These are intentionally vague about key material. None of them ever
//! carries secret bytes, and [`VerifyError`] never crosses the `verify`
//! boundary: it only exists for the opt-in diagnostic path.

use thiserror::Error;

/// Failure to turn text back into bytes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Characters outside the base64 alphabet, bad padding, or a length that
    /// doesn't fit the 4-character block size.
    #[error("invalid base64 input: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// Malformed hex (used for digests only).
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors that can occur while creating or loading key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// A private key that isn't exactly 32 bytes. Caller contract violation.
    #[error("invalid private key length: expected {expected} bytes, got {actual}")]
    InvalidSecretKeyLength {
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Bytes that don't decode to an Ed25519 point, or have the wrong length.
    #[error("invalid public key bytes: not a valid Ed25519 point")]
    InvalidPublicKey,

    /// A supplied public key doesn't match the one derived from the private key.
    #[error("key pair validation failed: public key does not match private key")]
    KeypairMismatch,

    /// The random source refused to produce bytes. Fatal for this call.
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),
}

/// Why a verification came out `false`.
///
/// Only [`Engine::diagnose`](super::Engine::diagnose) returns this.
/// [`Engine::verify`](super::Engine::verify) throws the reason away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The signature text isn't valid base64.
    #[error("signature is not valid base64")]
    MalformedSignature,

    /// The public key text isn't valid base64.
    #[error("public key is not valid base64")]
    MalformedPublicKey,

    /// Decoded signature has the wrong number of bytes.
    #[error("signature must be 64 bytes, got {actual}")]
    SignatureLength {
        /// Decoded length.
        actual: usize,
    },

    /// Decoded public key has the wrong number of bytes.
    #[error("public key must be 32 bytes, got {actual}")]
    PublicKeyLength {
        /// Decoded length.
        actual: usize,
    },

    /// 32 bytes, but not a usable Ed25519 point.
    #[error("public key is not a valid Ed25519 point")]
    InvalidPublicKey,

    /// Everything parsed; the math said no.
    #[error("signature does not match message and public key")]
    SignatureMismatch,
}
