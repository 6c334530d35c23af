//! # CLI Interface
//!
//! Argument structure for the `msgseal` binary, via `clap` derive.
//! Five subcommands: `keygen`, `hash`, `sign`, `verify`, and `version`.

use clap::{Parser, Subcommand};

/// Hash-then-sign message authentication from the shell.
///
/// Every subcommand prints JSON on stdout. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(
    name = "msgseal",
    about = "SHA-256 + Ed25519 message signing and verification",
    version,
    propagate_version = true
)]
pub struct MsgsealCli {
    /// Log output format: "pretty" or "json".
    #[arg(long, global = true, env = "MSGSEAL_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh Ed25519 key pair.
    Keygen,
    /// Print the SHA-256 digest of a message as hex.
    Hash(HashArgs),
    /// Hash a message and sign the digest.
    Sign(SignArgs),
    /// Check a message against a base64 signature and public key.
    Verify(VerifyArgs),
    /// Print version and algorithm information.
    Version,
}

/// Arguments for the `hash` subcommand.
#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Message text (UTF-8).
    #[arg(long, short = 'm')]
    pub message: String,
}

/// Arguments for the `sign` subcommand.
#[derive(Parser, Debug)]
pub struct SignArgs {
    /// Message text (UTF-8).
    #[arg(long, short = 'm')]
    pub message: String,

    /// Base64 private key (32 bytes).
    ///
    /// When omitted, a fresh key pair is generated for this signature only.
    /// **Don't pass real keys on the command line.** They end up in shell
    /// history. Prefer the environment variable.
    #[arg(long, env = "MSGSEAL_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Message text (UTF-8).
    #[arg(long, short = 'm')]
    pub message: String,

    /// Base64 signature.
    #[arg(long, short = 's')]
    pub signature: String,

    /// Base64 public key.
    #[arg(long, short = 'p')]
    pub public_key: String,
}
