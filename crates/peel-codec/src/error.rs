//! # Codec Error Types
//!
//! All codec operations return structured errors — no panics cross the
//! public boundary. The two variants mirror the two ways a decode can go
//! wrong: the encoded text itself is invalid, or the decoded bytes are
//! not text.

use thiserror::Error;

/// Error produced by Base64/Base64URL decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input violates the Base64 alphabet, padding, or length rules.
    #[error("invalid Base64 encoding: {0}")]
    InvalidEncoding(String),

    /// The decode succeeded but the resulting bytes are not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(String),
}
