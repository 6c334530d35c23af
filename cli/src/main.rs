// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # msgseal CLI
//!
//! Entry point for the `msgseal` binary. Parses arguments, initializes
//! logging, runs one operation against the library, prints JSON.
//!
//! - `keygen`: generate a key pair
//! - `hash`: SHA-256 digest of a message
//! - `sign`: hash and sign a message
//! - `verify`: check a message, signature, and public key
//! - `version`: print build and algorithm information
//!
//! A failed verification is a result, not an error: the process exits 0
//! and prints `{"valid": false}`.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

use msgseal::config::{DIGEST_ALGORITHM, SIGNATURE_ALGORITHM, TEXT_ENCODING};
use msgseal::crypto::{codec, Engine};

use cli::{Commands, MsgsealCli};
use logging::LogFormat;

fn main() -> Result<()> {
    let cli = MsgsealCli::parse();
    logging::init_logging(
        logging::DEFAULT_FILTER,
        LogFormat::from_str_lossy(&cli.log_format),
    );

    let output = execute(&Engine::standard(), cli.command)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("failed to render output")?
    );
    Ok(())
}

/// Run one subcommand and return its JSON output.
fn execute(engine: &Engine, command: Commands) -> Result<Value> {
    match command {
        Commands::Keygen => {
            let keypair = engine
                .generate_key_pair()
                .context("failed to generate key pair")?;
            tracing::info!(public_key = %keypair.public_key_hex(), "generated key pair");
            Ok(json!({
                "privateKey": codec::encode(&keypair.private_key()),
                "publicKey": keypair.public_key_base64(),
            }))
        }
        Commands::Hash(args) => Ok(json!({ "hash": engine.hash(&args.message).to_hex() })),
        Commands::Sign(args) => {
            let private_key = args
                .private_key
                .as_deref()
                .map(codec::decode)
                .transpose()
                .context("private key is not valid base64")?;
            let signed = engine
                .hash_and_sign(&args.message, private_key.as_deref())
                .context("failed to sign message")?;
            tracing::info!(hash = %signed.hash, "message signed");
            Ok(serde_json::to_value(signed)?)
        }
        Commands::Verify(args) => {
            let valid = engine.verify(&args.message, &args.signature, &args.public_key);
            tracing::info!(valid, "verification finished");
            Ok(json!({ "valid": valid }))
        }
        Commands::Version => Ok(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "signature": SIGNATURE_ALGORITHM,
            "digest": DIGEST_ALGORITHM,
            "encoding": TEXT_ENCODING,
        })),
    }
}
