//! # peel-cli — Toolbox Command-Line Interface
//!
//! Thin presentation surface over the peel library crates. Each
//! subcommand maps 1:1 onto a library operation.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the library crates — no decoding logic
//!   lives here.

pub mod base64;
pub mod json;
pub mod jwt;
