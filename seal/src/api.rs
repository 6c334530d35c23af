//! # Host Boundary
//!
//! The flat function set a host application (a UI layer, an FFI shim)
//! calls. Each function builds a default [`Engine`] on the stack, uses it,
//! and drops it, so there's no shared state between calls and every
//! function is safe to call from any thread.
//!
//! Hosts that want a different hasher or random source should hold an
//! [`Engine`] of their own instead.

use crate::crypto::{codec, CodecError, Engine, KeyError, KeyPair, SignResult};

/// Fresh Ed25519 key pair from the OS random source.
pub fn generate_key_pair() -> Result<KeyPair, KeyError> {
    Engine::standard().generate_key_pair()
}

/// SHA-256 the message, sign the digest, return the text bundle.
///
/// Omit `private_key` to sign with a freshly generated pair.
pub fn hash_and_sign(message: &str, private_key: Option<&[u8]>) -> Result<SignResult, KeyError> {
    Engine::standard().hash_and_sign(message, private_key)
}

/// `true` only if `signature` (base64) is a valid signature of the message's
/// SHA-256 digest under `public_key` (base64). Every failure is `false`.
pub fn verify_signature(message: &str, signature: &str, public_key: &str) -> bool {
    Engine::standard().verify(message, signature, public_key)
}

/// Padded standard base64.
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    codec::encode(bytes)
}

/// Strict inverse of [`bytes_to_base64`].
pub fn base64_to_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    codec::decode(text)
}
