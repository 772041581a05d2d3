//! # JSON Decode Error Types
//!
//! The normalizer is deliberately lenient: once given non-empty text it
//! always produces a result, so [`JsonDecodeError::EmptyInput`] is its only
//! failure. The auto-decoder additionally surfaces a syntax error when all
//! of its strategies are exhausted.

use thiserror::Error;

/// Error produced by JSON decoding and formatting operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonDecodeError {
    /// The input is empty or whitespace-only — nothing to process.
    #[error("input is empty")]
    EmptyInput,

    /// The input could not be parsed as JSON after all decode strategies.
    #[error("invalid JSON: {0}")]
    JsonSyntax(String),
}
