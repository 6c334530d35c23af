//! # Key Generation
//!
//! Draws 32 bytes from a cryptographically secure random source and treats
//! them as an Ed25519 seed. That's it. No key stretching, no caching.
//!
//! The random source is injected. In production it's `OsRng`, which is
//! already safe to share between threads. Other sources (seeded test RNGs,
//! hardware RNG adapters) usually aren't, so the generator keeps whatever
//! it's given behind a `parking_lot::Mutex` and callers never lock anything
//! themselves.
//!
//! If the source can't deliver, generation fails with
//! [`KeyError::EntropyUnavailable`]. There is no fallback to a weaker source
//! and no automatic retry.

use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use super::error::KeyError;
use super::keys::KeyPair;
use crate::config::PRIVATE_KEY_LENGTH;

/// Produces fresh [`KeyPair`]s from a secure random source.
pub struct KeyGenerator<R = OsRng> {
    rng: Mutex<R>,
}

impl KeyGenerator<OsRng> {
    /// A generator backed by the operating system RNG.
    pub fn new() -> Self {
        Self::from_rng(OsRng)
    }
}

impl Default for KeyGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRng + RngCore> KeyGenerator<R> {
    /// A generator backed by a caller-supplied CSPRNG.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Generate a new key pair.
    ///
    /// Consumes exactly 32 bytes from the random source.
    pub fn generate(&self) -> Result<KeyPair, KeyError> {
        let mut seed = [0u8; PRIVATE_KEY_LENGTH];
        self.rng
            .lock()
            .try_fill_bytes(&mut seed)
            .map_err(|e| KeyError::EntropyUnavailable(e.to_string()))?;

        let keypair = KeyPair::from_seed(&seed);
        tracing::debug!(public_key = %keypair.public_key_hex(), "generated key pair");
        Ok(keypair)
    }
}

impl<R> std::fmt::Debug for KeyGenerator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyGenerator").finish_non_exhaustive()
    }
}
