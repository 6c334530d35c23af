// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # msgseal: Message Authentication Core
//!
//! Hash a message, sign the hash, hand back something a UI can show and a
//! peer can check. That's the whole job.
//!
//! The pipeline is deliberately short:
//!
//! ```text
//! text ──UTF-8──▶ SHA-256 ──▶ Digest (32 bytes) ──Ed25519──▶ Signature (64 bytes)
//!                                │                               │
//!                             hex (64)                       base64 (88)
//! ```
//!
//! Verification runs the same pipe backwards and collapses every failure
//! into a single `false`.
//!
//! ## Modules
//!
//! - **crypto**: Codec, key generation, and the sign/verify engine.
//! - **api**: The flat, in-process boundary that host applications call.
//! - **config**: Lengths, algorithm names, and known constants.
//!
//! ## Ground rules
//!
//! 1. No process-wide state. Hashers and random sources are injected into
//!    the [`Engine`](crypto::Engine) when it is built.
//! 2. Key material is never logged and never cached between calls.
//! 3. `verify` is total: it returns a boolean for every input, no panics.
//!
//! ```
//! let signed = msgseal::hash_and_sign("Hello, World!", None).unwrap();
//! assert!(msgseal::verify_signature("Hello, World!", &signed.signature, &signed.public_key));
//! ```

pub mod api;
pub mod config;
pub mod crypto;

pub use api::{base64_to_bytes, bytes_to_base64, generate_key_pair, hash_and_sign, verify_signature};
pub use crypto::{
    CodecError, Digest, Engine, KeyError, KeyGenerator, KeyPair, MessageHasher, Sha256Hasher,
    SignResult, Signature, VerifyError,
};
