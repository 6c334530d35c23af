//! # Key Material
//!
//! Ed25519 key pairs and signatures as plain value types.
//!
//! A [`KeyPair`] is owned wholly by its caller. Nothing in this crate keeps
//! a copy once the call that needed it returns, and there is no global key
//! store. If you want persistence, that's the host application's problem.
//!
//! ## Invariant
//!
//! `public_key == derive(private_key)` for every `KeyPair` that exists.
//! It holds by construction: the pair stores only the `SigningKey` and
//! derives the public half on demand. [`KeyPair::from_parts`] is the one
//! way to bring an externally supplied public key in, and it checks.
//!
//! ## Security considerations
//!
//! - Key bytes are never logged. `Debug` prints the public key only.
//! - The private key is the 32-byte Ed25519 seed, not the expanded scalar.

use ed25519_dalek::{Signature as DalekSignature, Signer, SigningKey, VerifyingKey};
use std::fmt;

use super::codec;
use super::error::{KeyError, VerifyError};
use super::hash::Digest;
use crate::config::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// An Ed25519 private key and its derived public key.
///
/// # Examples
///
/// ```
/// use msgseal::crypto::{KeyPair, MessageHasher, Sha256Hasher};
///
/// let kp = KeyPair::from_seed(&[9u8; 32]);
/// let digest = Sha256Hasher.digest(b"pay bob 5");
/// let sig = kp.sign_digest(&digest);
/// assert_eq!(sig.as_bytes().len(), 64);
/// ```
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

/// A 64-byte Ed25519 signature over a digest.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    bytes: [u8; SIGNATURE_LENGTH],
}

impl KeyPair {
    /// Fresh key pair from the operating system RNG.
    ///
    /// Shorthand for `KeyGenerator::new().generate()`.
    pub fn generate() -> Result<Self, KeyError> {
        super::keygen::KeyGenerator::new().generate()
    }

    /// Build a key pair from a 32-byte seed. The seed *is* the private key.
    pub fn from_seed(seed: &[u8; PRIVATE_KEY_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Build a key pair from caller-supplied private key bytes.
    ///
    /// Anything other than exactly 32 bytes is rejected before it gets near
    /// the signature scheme.
    pub fn from_private_key(private_key: &[u8]) -> Result<Self, KeyError> {
        let seed: [u8; PRIVATE_KEY_LENGTH] =
            private_key
                .try_into()
                .map_err(|_| KeyError::InvalidSecretKeyLength {
                    expected: PRIVATE_KEY_LENGTH,
                    actual: private_key.len(),
                })?;
        Ok(Self::from_seed(&seed))
    }

    /// Accept an externally stored (private, public) pair.
    ///
    /// Fails unless the public key is exactly what the private key derives.
    pub fn from_parts(private_key: &[u8], public_key: &[u8]) -> Result<Self, KeyError> {
        let kp = Self::from_private_key(private_key)?;
        if public_key.len() != PUBLIC_KEY_LENGTH {
            return Err(KeyError::InvalidPublicKey);
        }
        if kp.public_key().as_slice() != public_key {
            return Err(KeyError::KeypairMismatch);
        }
        Ok(kp)
    }

    /// The raw 32-byte private key.
    ///
    /// Handle with care. Don't log it, don't put it in an error message.
    pub fn private_key(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.signing_key.to_bytes()
    }

    /// The raw 32-byte public key.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Public key as padded base64, the form that goes into a `SignResult`.
    pub fn public_key_base64(&self) -> String {
        codec::encode(&self.public_key())
    }

    /// Public key as hex. Only used for log fingerprints.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    /// Check `public_key == derive(private_key)`.
    ///
    /// Holds by construction: the pair stores only the signing key, so this
    /// can't return `false`. Checking an externally supplied public key is
    /// [`from_parts`](Self::from_parts)'s job.
    pub fn is_consistent(&self) -> bool {
        SigningKey::from_bytes(&self.private_key()).verifying_key().to_bytes() == self.public_key()
    }

    /// Sign a digest with this pair's private key.
    ///
    /// Ed25519 is deterministic: the same key and digest always give the
    /// same signature.
    pub fn sign_digest(&self, digest: &Digest) -> Signature {
        let sig = self.signing_key.sign(digest.as_bytes());
        Signature {
            bytes: sig.to_bytes(),
        }
    }

    /// The underlying `VerifyingKey`.
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Public half only. Not even a prefix of the private key.
        write!(f, "KeyPair(pub={})", self.public_key_hex())
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for KeyPair {}

// ---------------------------------------------------------------------------
// Signature
// ---------------------------------------------------------------------------

impl Signature {
    /// Wrap raw signature bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Length-checked construction from a slice.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes: [u8; SIGNATURE_LENGTH] = slice.try_into().ok()?;
        Some(Self { bytes })
    }

    /// The raw 64 bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }

    /// Padded base64, 88 characters.
    pub fn to_base64(&self) -> String {
        codec::encode(&self.bytes)
    }

    /// Parse padded base64 and require exactly 64 bytes.
    pub fn from_base64(text: &str) -> Result<Self, VerifyError> {
        let bytes = codec::decode(text).map_err(|_| VerifyError::MalformedSignature)?;
        Self::from_slice(&bytes).ok_or(VerifyError::SignatureLength {
            actual: bytes.len(),
        })
    }

    /// Convert for direct use with ed25519-dalek.
    pub(crate) fn to_dalek(self) -> DalekSignature {
        DalekSignature::from_bytes(&self.bytes)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex_str = hex::encode(self.bytes);
        write!(f, "Signature({}...{})", &hex_str[..8], &hex_str[120..])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64())
    }
}
