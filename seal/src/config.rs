//! # Constants
//!
//! Every fixed size and algorithm name in msgseal lives here. These values
//! are part of the observable contract (callers pattern-match on hex and
//! base64 lengths), so changing any of them is a breaking change.

// ---------------------------------------------------------------------------
// Algorithms
// ---------------------------------------------------------------------------

/// Signature scheme applied to the digest.
pub const SIGNATURE_ALGORITHM: &str = "Ed25519";

/// Default one-way hash applied to the UTF-8 message bytes.
pub const DIGEST_ALGORITHM: &str = "SHA-256";

/// Alternative digest offered through [`Blake3Hasher`](crate::crypto::Blake3Hasher).
pub const BLAKE3_DIGEST_ALGORITHM: &str = "BLAKE3";

/// Text encoding used for signatures and public keys.
pub const TEXT_ENCODING: &str = "base64";

// ---------------------------------------------------------------------------
// Sizes
// ---------------------------------------------------------------------------

/// Ed25519 private key (seed) length in bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Ed25519 public key length in bytes (compressed Edwards point).
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// Digest length in bytes. Every supported hasher produces 32 bytes.
pub const DIGEST_LENGTH: usize = 32;

/// Length of the lowercase hex rendering of a digest.
pub const DIGEST_HEX_LENGTH: usize = DIGEST_LENGTH * 2;

// ---------------------------------------------------------------------------
// Known values
// ---------------------------------------------------------------------------

/// SHA-256 of the empty string. Handy for sanity checks and tests.
pub const EMPTY_MESSAGE_DIGEST_HEX: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Returns the base64 text length for `n` raw bytes with `=` padding.
pub const fn base64_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}
