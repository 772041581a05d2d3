//! # JSON Formatting Helpers
//!
//! Plain parse-and-reprint operations for already-clean JSON text:
//! pretty-printing with a configurable indent and minification.

use serde::Serialize;
use serde_json::Value;

use crate::error::JsonDecodeError;

/// Parse text as JSON.
///
/// # Errors
///
/// [`JsonDecodeError::EmptyInput`] for empty input,
/// [`JsonDecodeError::JsonSyntax`] for invalid JSON.
pub fn parse_json(input: &str) -> Result<Value, JsonDecodeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JsonDecodeError::EmptyInput);
    }
    serde_json::from_str(trimmed).map_err(|e| JsonDecodeError::JsonSyntax(e.to_string()))
}

/// Pretty-print JSON text with 2-space indentation.
///
/// # Errors
///
/// Same as [`parse_json`].
pub fn format_json(input: &str) -> Result<String, JsonDecodeError> {
    format_json_with_indent(input, 2)
}

/// Pretty-print JSON text with a caller-chosen indent width.
///
/// # Errors
///
/// Same as [`parse_json`].
pub fn format_json_with_indent(input: &str, indent: usize) -> Result<String, JsonDecodeError> {
    let value = parse_json(input)?;
    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| JsonDecodeError::JsonSyntax(e.to_string()))?;
    String::from_utf8(out).map_err(|e| JsonDecodeError::JsonSyntax(e.to_string()))
}

/// Reprint JSON text in compact form (no whitespace).
///
/// # Errors
///
/// Same as [`parse_json`].
pub fn minify_json(input: &str) -> Result<String, JsonDecodeError> {
    let value = parse_json(input)?;
    Ok(value.to_string())
}
