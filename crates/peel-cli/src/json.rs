//! # JSON Subcommand
//!
//! Escaped-JSON auto-decoding plus plain format/minify operations.

use clap::{Args, Subcommand};

/// Arguments for the json subcommand.
#[derive(Args, Debug)]
pub struct JsonArgs {
    #[command(subcommand)]
    pub command: JsonCommand,
}

#[derive(Subcommand, Debug)]
pub enum JsonCommand {
    /// Auto-detect and peel stringified/escaped JSON, then pretty-print.
    Decode {
        /// The (possibly escaped) JSON text.
        input: String,

        /// Print the raw unescaped text instead of the formatted rendering.
        #[arg(long)]
        raw: bool,
    },
    /// Pretty-print clean JSON.
    Format {
        /// The JSON text.
        input: String,

        /// Indent width in spaces.
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Reprint JSON in compact form.
    Minify {
        /// The JSON text.
        input: String,
    },
}

/// Dispatch the json subcommand.
pub fn run(args: JsonArgs) -> anyhow::Result<()> {
    match args.command {
        JsonCommand::Decode { input, raw } => {
            let result = peel_json::auto_decode(&input)?;
            if raw {
                println!("{}", result.decoded);
            } else {
                println!("{}", result.formatted);
            }
        }
        JsonCommand::Format { input, indent } => {
            println!("{}", peel_json::format_json_with_indent(&input, indent)?);
        }
        JsonCommand::Minify { input } => {
            println!("{}", peel_json::minify_json(&input)?);
        }
    }
    Ok(())
}
