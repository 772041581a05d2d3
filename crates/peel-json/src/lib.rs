//! # peel-json — Escaped-JSON Normalization
//!
//! Decodes JSON that has been stringify-encoded zero or more times, a
//! pattern endemic to server logs. Two layers:
//!
//! - **Normalizer** — the bounded iterative peel loop that strips layers
//!   of quoting/escaping ([`normalize_escaped`]).
//! - **Auto-decoder** — a policy wrapper that picks a strategy from a
//!   cheap textual heuristic and falls back between strategies
//!   ([`auto_decode`]).
//!
//! Plus plain formatting helpers ([`format_json`], [`minify_json`]) for
//! text that needs no peeling.
//!
//! ## Crate Policy
//!
//! - All operations are pure, synchronous functions over caller-supplied
//!   strings; no I/O, no shared state.
//! - The normalizer never fails on non-empty input — unparsable text is
//!   returned as-is, not raised as an error.
//! - No `unsafe`, no `panic!()`/`.unwrap()` outside tests.

pub mod decode;
pub mod error;
pub mod format;
pub mod normalize;

pub use decode::auto_decode;
pub use error::JsonDecodeError;
pub use format::{format_json, format_json_with_indent, minify_json, parse_json};
pub use normalize::{normalize_escaped, DecodedJson, MAX_PEEL_ITERATIONS};
