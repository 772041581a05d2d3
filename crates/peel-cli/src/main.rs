//! # peel CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// peel — toolbox for layered/encoded text.
///
/// Decodes Base64 and Base64URL, peels stringified/escaped JSON from
/// server logs, formats JSON, and structurally decodes JWTs (without
/// verifying signatures).
#[derive(Parser, Debug)]
#[command(name = "peel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Base64 and Base64URL coding.
    Base64(peel_cli::base64::Base64Args),
    /// Escaped-JSON decoding and JSON formatting.
    Json(peel_cli::json::JsonArgs),
    /// JWT structural decoding (no signature verification).
    Jwt(peel_cli::jwt::JwtArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Base64(args) => peel_cli::base64::run(args),
        Commands::Json(args) => peel_cli::json::run(args),
        Commands::Jwt(args) => peel_cli::jwt::run(args),
    }
}
