//! # Cryptographic Core
//!
//! Three pieces, leaves first:
//!
//! - **codec**: base64 for keys and signatures that have to travel as text.
//! - **keygen**: Ed25519 key pairs from a secure random source.
//! - **engine**: SHA-256 then Ed25519, and the reverse check.
//!
//! `hash` and `keys` hold the value types the three pieces pass around.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Curve arithmetic comes from `ed25519-dalek`, hashing from
//! `sha2` and `blake3`, base64 from `base64`. This module is plumbing and
//! types around those crates.

pub mod codec;
pub mod engine;
pub mod error;
pub mod hash;
pub mod keygen;
pub mod keys;

pub use engine::{Engine, SignResult};
pub use error::{CodecError, KeyError, VerifyError};
pub use hash::{Blake3Hasher, Digest, MessageHasher, Sha256Hasher};
pub use keygen::KeyGenerator;
pub use keys::{KeyPair, Signature};
