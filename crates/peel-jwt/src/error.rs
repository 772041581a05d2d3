//! # JWT Decode Error Types
//!
//! The decoder is strict: each gate (trim, split, decode, parse) aborts
//! at the first failure with no partial document. Every variant names the
//! gate that failed; decode errors carry the underlying codec error.

use peel_codec::CodecError;
use thiserror::Error;

/// Error produced by JWT structural decoding.
#[derive(Error, Debug)]
pub enum JwtError {
    /// The token is empty or whitespace-only.
    #[error("token is empty")]
    EmptyToken,

    /// The token does not have exactly 3 dot-separated segments.
    #[error("invalid JWT format: expected 3 segments (header.payload.signature), got {parts}")]
    MalformedStructure {
        /// The segment count actually observed.
        parts: usize,
    },

    /// Base64URL decoding of the header segment failed.
    #[error("failed to decode header: {0}")]
    HeaderDecode(#[source] CodecError),

    /// The decoded header is not valid JSON.
    #[error("failed to parse header as JSON: {0}")]
    HeaderParse(#[source] serde_json::Error),

    /// Base64URL decoding of the payload segment failed.
    #[error("failed to decode payload: {0}")]
    PayloadDecode(#[source] CodecError),

    /// The decoded payload is not valid JSON.
    #[error("failed to parse payload as JSON: {0}")]
    PayloadParse(#[source] serde_json::Error),
}
