//! # JWT Subcommand
//!
//! Structural token decoding: prints header, payload, signature, and the
//! expiry status derived from the `exp` claim. Output is informational
//! only — nothing here verifies the signature.

use clap::Args;
use peel_jwt::{decode_jwt, format_timestamp, is_expired};

/// Arguments for the jwt subcommand.
#[derive(Args, Debug)]
pub struct JwtArgs {
    /// The token to decode (header.payload.signature).
    pub token: String,
}

/// Dispatch the jwt subcommand.
pub fn run(args: JwtArgs) -> anyhow::Result<()> {
    let doc = decode_jwt(&args.token)?;

    println!("Header:");
    println!("{}", serde_json::to_string_pretty(&doc.header)?);
    println!();
    println!("Payload:");
    println!("{}", serde_json::to_string_pretty(&doc.payload)?);
    println!();
    println!("Signature (not verified): {}", doc.signature);

    if let Some(exp) = doc.exp() {
        let status = if is_expired(exp) { "EXPIRED" } else { "valid" };
        println!("Expiry: {} — {status}", format_timestamp(exp));
    }

    Ok(())
}
