//! # Base64 Subcommand
//!
//! Standard Base64 encode/decode and Base64URL decode.

use clap::{Args, Subcommand};

/// Arguments for the base64 subcommand.
#[derive(Args, Debug)]
pub struct Base64Args {
    #[command(subcommand)]
    pub command: Base64Command,
}

#[derive(Subcommand, Debug)]
pub enum Base64Command {
    /// Encode text to standard Base64.
    Encode {
        /// The text to encode.
        text: String,
    },
    /// Decode standard Base64 to text.
    Decode {
        /// The Base64 input.
        encoded: String,
    },
    /// Decode Base64URL (URL-safe alphabet, padding optional) to text.
    DecodeUrl {
        /// The Base64URL input.
        encoded: String,
    },
}

/// Dispatch the base64 subcommand.
pub fn run(args: Base64Args) -> anyhow::Result<()> {
    match args.command {
        Base64Command::Encode { text } => println!("{}", peel_codec::encode_base64(&text)),
        Base64Command::Decode { encoded } => println!("{}", peel_codec::decode_base64(&encoded)?),
        Base64Command::DecodeUrl { encoded } => {
            println!("{}", peel_codec::decode_base64_url(&encoded)?)
        }
    }
    Ok(())
}
