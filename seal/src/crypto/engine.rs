//! # Sign/Verify Engine
//!
//! Hash-then-sign, and the matching check.
//!
//! ```text
//! sign:    message ─UTF-8─▶ hasher ─▶ Digest ─Ed25519(private)─▶ Signature
//! verify:  message ─UTF-8─▶ hasher ─▶ Digest ─Ed25519(public)──▶ bool
//! ```
//!
//! The engine is stateless. It owns two dependencies, both handed in at
//! construction: a [`MessageHasher`] and a [`KeyGenerator`]. Nothing is
//! configured globally, and two engines never see each other.
//!
//! ## Verification is total
//!
//! [`Engine::verify`] answers `true` or `false` for every input. Bad base64,
//! wrong lengths, off-curve keys, tampered signatures, wrong messages: all of
//! them are the same `false`. Callers can't tell which part was wrong, and
//! neither can anybody timing them. If you need the reason while debugging,
//! call [`Engine::diagnose`] instead; it runs the same steps and returns a
//! [`VerifyError`].

use ed25519_dalek::{Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use super::codec;
use super::error::{KeyError, VerifyError};
use super::hash::{Digest, MessageHasher, Sha256Hasher};
use super::keygen::KeyGenerator;
use super::keys::{KeyPair, Signature};
use crate::config::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// The text bundle handed back after signing.
///
/// Serializes as `{"hash": ..., "signature": ..., "publicKey": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResult {
    /// Lowercase hex digest, 64 characters.
    pub hash: String,
    /// Padded base64 of the 64-byte signature.
    pub signature: String,
    /// Padded base64 of the 32-byte public key.
    pub public_key: String,
}

/// Hash-then-sign engine with injected hasher and random source.
///
/// # Examples
///
/// ```
/// use msgseal::crypto::Engine;
///
/// let engine = Engine::standard();
/// let signed = engine.hash_and_sign("send 100 to alice", None).unwrap();
/// assert!(engine.verify("send 100 to alice", &signed.signature, &signed.public_key));
/// assert!(!engine.verify("send 900 to alice", &signed.signature, &signed.public_key));
/// ```
#[derive(Debug)]
pub struct Engine<H = Sha256Hasher, R = OsRng> {
    hasher: H,
    keygen: KeyGenerator<R>,
}

impl Engine {
    /// SHA-256 digests and the OS random source.
    pub fn standard() -> Self {
        Self::new(Sha256Hasher, KeyGenerator::new())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}

impl<H: MessageHasher> Engine<H, OsRng> {
    /// Engine with a custom hasher and the OS random source.
    pub fn with_hasher(hasher: H) -> Self {
        Self::new(hasher, KeyGenerator::new())
    }
}

impl<H: MessageHasher, R: CryptoRng + RngCore> Engine<H, R> {
    /// Wire up an engine from its two dependencies.
    pub fn new(hasher: H, keygen: KeyGenerator<R>) -> Self {
        Self { hasher, keygen }
    }

    /// The injected hasher.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The injected key generator.
    pub fn key_generator(&self) -> &KeyGenerator<R> {
        &self.keygen
    }

    /// Fresh key pair from the engine's random source.
    pub fn generate_key_pair(&self) -> Result<KeyPair, KeyError> {
        self.keygen.generate()
    }

    /// Digest of the message's UTF-8 bytes. Never fails.
    pub fn hash(&self, message: &str) -> Digest {
        self.hasher.digest(message.as_bytes())
    }

    /// Sign a precomputed digest with raw private key bytes.
    ///
    /// The key must be exactly 32 bytes; anything else is rejected with
    /// [`KeyError::InvalidSecretKeyLength`] before the scheme runs.
    pub fn sign_with_digest(
        &self,
        digest: &Digest,
        private_key: &[u8],
    ) -> Result<Signature, KeyError> {
        let keypair = KeyPair::from_private_key(private_key)?;
        Ok(keypair.sign_digest(digest))
    }

    /// Hash a message and sign the digest.
    ///
    /// With `private_key: None` a fresh key pair is drawn from the random
    /// source (the only place this engine touches randomness). With a key,
    /// the public half is derived from it.
    pub fn hash_and_sign(
        &self,
        message: &str,
        private_key: Option<&[u8]>,
    ) -> Result<SignResult, KeyError> {
        let keypair = match private_key {
            Some(bytes) => KeyPair::from_private_key(bytes)?,
            None => self.keygen.generate()?,
        };
        Ok(self.sign_with_keypair(message, &keypair))
    }

    /// Hash and sign with a key pair the caller already holds.
    pub fn sign_with_keypair(&self, message: &str, keypair: &KeyPair) -> SignResult {
        let digest = self.hash(message);
        let signature = keypair.sign_digest(&digest);

        tracing::debug!(
            digest = %digest,
            algorithm = self.hasher.algorithm(),
            public_key = %keypair.public_key_hex(),
            "signed message digest"
        );

        SignResult {
            hash: digest.to_hex(),
            signature: signature.to_base64(),
            public_key: keypair.public_key_base64(),
        }
    }

    /// Check a (message, signature, public key) triple. Never fails, never panics.
    pub fn verify(&self, message: &str, signature_text: &str, public_key_text: &str) -> bool {
        match self.diagnose(message, signature_text, public_key_text) {
            Ok(()) => true,
            Err(reason) => {
                tracing::debug!(%reason, "signature verification failed");
                false
            }
        }
    }

    /// Same steps as [`verify`](Self::verify), but says why it failed.
    ///
    /// Diagnostic only. Don't surface the reason to untrusted parties.
    pub fn diagnose(
        &self,
        message: &str,
        signature_text: &str,
        public_key_text: &str,
    ) -> Result<(), VerifyError> {
        let signature = Signature::from_base64(signature_text)?;
        let public_key =
            codec::decode(public_key_text).map_err(|_| VerifyError::MalformedPublicKey)?;
        let digest = self.hash(message);
        check_digest(&digest, signature.as_bytes(), &public_key)
    }

    /// Verify raw signature and public key bytes against a digest.
    pub fn verify_digest(&self, digest: &Digest, signature: &[u8], public_key: &[u8]) -> bool {
        check_digest(digest, signature, public_key).is_ok()
    }
}

/// The scheme-level check shared by `diagnose` and `verify_digest`.
///
/// Runs the standard RFC 8032 predicate (`Verifier::verify`), the same one
/// the rest of the Ed25519 world accepts. It does not add the extra
/// small-order key checks of `verify_strict`.
fn check_digest(digest: &Digest, signature: &[u8], public_key: &[u8]) -> Result<(), VerifyError> {
    let signature = Signature::from_slice(signature).ok_or(VerifyError::SignatureLength {
        actual: signature.len(),
    })?;
    let public_key: [u8; PUBLIC_KEY_LENGTH] = public_key
        .try_into()
        .map_err(|_| VerifyError::PublicKeyLength {
            actual: public_key.len(),
        })?;

    let verifying_key =
        VerifyingKey::from_bytes(&public_key).map_err(|_| VerifyError::InvalidPublicKey)?;
    verifying_key
        .verify(digest.as_bytes(), &signature.to_dalek())
        .map_err(|_| VerifyError::SignatureMismatch)
}

// Compile-time check that the constants and the dalek types agree.
const _: () = assert!(SIGNATURE_LENGTH == ed25519_dalek::SIGNATURE_LENGTH);
const _: () = assert!(PUBLIC_KEY_LENGTH == ed25519_dalek::PUBLIC_KEY_LENGTH);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EMPTY_MESSAGE_DIGEST_HEX;
    use crate::crypto::hash::Blake3Hasher;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_engine(seed: u64) -> Engine<Sha256Hasher, StdRng> {
        Engine::new(Sha256Hasher, KeyGenerator::from_rng(StdRng::seed_from_u64(seed)))
    }

    #[test]
    fn test_hash_empty_string() {
        assert_eq!(Engine::standard().hash("").to_hex(), EMPTY_MESSAGE_DIGEST_HEX);
    }

    #[test]
    fn test_hash_multibyte_text() {
        let engine = Engine::standard();
        let digest = engine.hash("你好世界 🌍");
        assert_eq!(digest, engine.hash("你好世界 🌍"));
        assert_ne!(digest, engine.hash("你好世界"));
    }

    #[test]
    fn test_sign_and_verify() {
        let engine = Engine::standard();
        let signed = engine.hash_and_sign("hello, world", None).unwrap();
        assert!(engine.verify("hello, world", &signed.signature, &signed.public_key));
    }

    #[test]
    fn test_result_shape() {
        let signed = Engine::standard().hash_and_sign("shape", None).unwrap();
        assert_eq!(signed.hash.len(), 64);
        assert!(signed.hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        assert_eq!(signed.signature.len(), 88);
        assert_eq!(signed.public_key.len(), 44);
    }

    #[test]
    fn test_supplied_key_derives_public_key() {
        let engine = Engine::standard();
        let kp = KeyPair::from_seed(&[11u8; 32]);
        let signed = engine.hash_and_sign("m", Some(&kp.private_key())).unwrap();
        assert_eq!(signed.public_key, kp.public_key_base64());
    }

    #[test]
    fn test_supplied_key_wrong_length_rejected() {
        let engine = Engine::standard();
        let err = engine.hash_and_sign("m", Some(&[1u8; 31])).unwrap_err();
        assert!(matches!(err, KeyError::InvalidSecretKeyLength { actual: 31, .. }));

        let digest = engine.hash("m");
        assert!(engine.sign_with_digest(&digest, &[]).is_err());
    }

    #[test]
    fn test_sign_with_digest_matches_hash_and_sign() {
        let engine = Engine::standard();
        let kp = KeyPair::from_seed(&[12u8; 32]);
        let sig = engine
            .sign_with_digest(&engine.hash("x"), &kp.private_key())
            .unwrap();
        let signed = engine.hash_and_sign("x", Some(&kp.private_key())).unwrap();
        assert_eq!(sig.to_base64(), signed.signature);
    }

    #[test]
    fn test_signed_bytes_are_the_digest() {
        // The Ed25519 message is the raw 32-byte digest, not the text.
        let engine = Engine::standard();
        let kp = KeyPair::from_seed(&[13u8; 32]);
        let signed = engine.sign_with_keypair("payload", &kp);
        let sig = codec::decode(&signed.signature).unwrap();
        assert!(engine.verify_digest(&engine.hash("payload"), &sig, &kp.public_key()));
        assert!(!engine.verify_digest(&engine.hash("other"), &sig, &kp.public_key()));
    }

    #[test]
    fn test_diagnose_reports_each_failure() {
        let engine = Engine::standard();
        let kp = KeyPair::from_seed(&[14u8; 32]);
        let signed = engine.sign_with_keypair("msg", &kp);

        assert_eq!(engine.diagnose("msg", &signed.signature, &signed.public_key), Ok(()));
        assert_eq!(
            engine.diagnose("msg", "not base64!", &signed.public_key),
            Err(VerifyError::MalformedSignature)
        );
        assert_eq!(
            engine.diagnose("msg", &signed.signature, "not base64!"),
            Err(VerifyError::MalformedPublicKey)
        );
        assert_eq!(
            engine.diagnose("msg", "", &signed.public_key),
            Err(VerifyError::SignatureLength { actual: 0 })
        );
        assert_eq!(
            engine.diagnose("msg", &signed.signature, &codec::encode(&[1u8; 31])),
            Err(VerifyError::PublicKeyLength { actual: 31 })
        );
        assert_eq!(
            engine.diagnose("other", &signed.signature, &signed.public_key),
            Err(VerifyError::SignatureMismatch)
        );
    }

    /// Identity point as a public key, R = identity and S = 0. The standard
    /// predicate accepts this for any digest; `verify_strict` would not.
    fn identity_triple() -> ([u8; 64], [u8; 32]) {
        let mut identity = [0u8; 32];
        identity[0] = 1;
        let mut signature = [0u8; 64];
        signature[..32].copy_from_slice(&identity);
        (signature, identity)
    }

    #[test]
    fn test_uses_standard_predicate_not_strict() {
        let (signature, identity) = identity_triple();
        let engine = Engine::standard();
        let digest = engine.hash("anything");

        let dalek = VerifyingKey::from_bytes(&identity)
            .unwrap()
            .verify(digest.as_bytes(), &ed25519_dalek::Signature::from_bytes(&signature))
            .is_ok();
        assert!(dalek);
        assert_eq!(engine.verify_digest(&digest, &signature, &identity), dalek);
        assert!(engine.verify(
            "anything",
            &codec::encode(&signature),
            &codec::encode(&identity)
        ));
    }

    #[test]
    fn test_zero_signature_under_real_key_rejected() {
        let kp = KeyPair::from_seed(&[16u8; 32]);
        let engine = Engine::standard();
        let digest = engine.hash("anything");
        assert!(!engine.verify_digest(&digest, &[0u8; 64], &kp.public_key()));
    }

    #[test]
    fn test_blake3_engine_roundtrip_and_isolation() {
        let blake = Engine::with_hasher(Blake3Hasher);
        let sha = Engine::standard();
        let kp = KeyPair::from_seed(&[15u8; 32]);

        let signed = blake.sign_with_keypair("msg", &kp);
        assert!(blake.verify("msg", &signed.signature, &signed.public_key));
        // Different hasher, different digest: a SHA-256 engine says no.
        assert!(!sha.verify("msg", &signed.signature, &signed.public_key));
        assert_eq!(blake.hasher().algorithm(), "BLAKE3");
    }

    #[test]
    fn test_seeded_engine_generates_reproducible_keys() {
        let a = seeded_engine(1).hash_and_sign("m", None).unwrap();
        let b = seeded_engine(1).hash_and_sign("m", None).unwrap();
        let c = seeded_engine(2).hash_and_sign("m", None).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.public_key, c.public_key);
    }

    #[test]
    fn test_sign_result_json_field_names() {
        let signed = Engine::standard().hash_and_sign("json", None).unwrap();
        let value = serde_json::to_value(&signed).unwrap();
        assert!(value.get("hash").is_some());
        assert!(value.get("signature").is_some());
        assert!(value.get("publicKey").is_some());
        assert!(value.get("public_key").is_none());

        let back: SignResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, signed);
    }
}
