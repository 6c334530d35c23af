//! # Message Digests
//!
//! The engine never signs a message directly. It signs a fixed 32-byte
//! digest of the message's UTF-8 bytes, so signing cost doesn't depend on
//! message length and the hex digest can be shown to users as a separate
//! integrity value.
//!
//! The hash function is a dependency of the [`Engine`](super::Engine), passed
//! in through the [`MessageHasher`] trait. [`Sha256Hasher`] is the default and
//! the one every published digest in this crate assumes. [`Blake3Hasher`] is
//! available for hosts that agree on it out of band.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use std::fmt;

use super::error::CodecError;
use crate::config::{BLAKE3_DIGEST_ALGORITHM, DIGEST_ALGORITHM, DIGEST_LENGTH};

/// A 32-byte one-way hash of a message.
///
/// Pure function of the input bytes. Renders as lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_LENGTH],
}

impl Digest {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self { bytes }
    }

    /// The raw 32 bytes. This is what actually gets signed.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LENGTH] {
        &self.bytes
    }

    /// Lowercase hex, always 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a 64-character hex digest. Either case is accepted.
    pub fn from_hex(s: &str) -> Result<Self, CodecError> {
        let mut bytes = [0u8; DIGEST_LENGTH];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self { bytes })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(de::Error::custom)
    }
}

/// A one-way hash the engine applies to message bytes before signing.
///
/// Implementations must be pure: same input, same digest, in every process.
pub trait MessageHasher: Send + Sync {
    /// Hash `data` into a 32-byte digest.
    fn digest(&self, data: &[u8]) -> Digest;

    /// Human-readable algorithm name, e.g. `"SHA-256"`.
    fn algorithm(&self) -> &'static str;
}

/// SHA-256 via the `sha2` crate. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl MessageHasher for Sha256Hasher {
    fn digest(&self, data: &[u8]) -> Digest {
        Digest::from_bytes(Sha256::digest(data).into())
    }

    fn algorithm(&self) -> &'static str {
        DIGEST_ALGORITHM
    }
}

/// BLAKE3 via the `blake3` crate.
///
/// Digests from this hasher are not interchangeable with SHA-256 ones.
/// Signer and verifier have to agree on the hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Hasher;

impl MessageHasher for Blake3Hasher {
    fn digest(&self, data: &[u8]) -> Digest {
        Digest::from_bytes(*blake3::hash(data).as_bytes())
    }

    fn algorithm(&self) -> &'static str {
        BLAKE3_DIGEST_ALGORITHM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EMPTY_MESSAGE_DIGEST_HEX;

    #[test]
    fn test_sha256_empty_input() {
        let digest = Sha256Hasher.digest(b"");
        assert_eq!(digest.to_hex(), EMPTY_MESSAGE_DIGEST_HEX);
    }

    #[test]
    fn test_sha256_known_vector() {
        // FIPS 180-2, appendix B.1.
        let digest = Sha256Hasher.digest(b"abc");
        assert_eq!(
            digest.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hashers_disagree() {
        let msg = b"same bytes, different function";
        assert_ne!(Sha256Hasher.digest(msg), Blake3Hasher.digest(msg));
    }

    #[test]
    fn test_blake3_is_deterministic() {
        assert_eq!(Blake3Hasher.digest(b"nova"), Blake3Hasher.digest(b"nova"));
        assert_eq!(Blake3Hasher.algorithm(), "BLAKE3");
    }

    #[test]
    fn test_hex_roundtrip_and_case() {
        let digest = Sha256Hasher.digest(b"abc");
        let hex_str = digest.to_hex();
        assert_eq!(Digest::from_hex(&hex_str).unwrap(), digest);
        assert_eq!(Digest::from_hex(&hex_str.to_uppercase()).unwrap(), digest);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Digest::from_hex("deadbeef").is_err());
        assert!(Digest::from_hex(&"zz".repeat(32)).is_err());
        assert!(Digest::from_hex(&"ab".repeat(33)).is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let digest = Sha256Hasher.digest(b"");
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", EMPTY_MESSAGE_DIGEST_HEX));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }

    #[test]
    fn test_display_matches_hex() {
        let digest = Sha256Hasher.digest(b"display");
        assert_eq!(digest.to_string(), digest.to_hex());
    }
}
