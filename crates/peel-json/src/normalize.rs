//! # Escaped-JSON Normalizer — Iterative Layer Peeling
//!
//! Server logs frequently contain JSON that has been `stringify`-encoded
//! one or more times: a JSON string literal whose content is itself JSON
//! text, possibly recursively. This module peels those layers one at a
//! time until a plain JSON value emerges.
//!
//! ## Termination Invariant
//!
//! The peel loop is bounded by [`MAX_PEEL_ITERATIONS`]. This is a hard cap
//! guaranteeing termination on adversarial input (text that keeps
//! re-parsing as a quoted string indefinitely), not a tuning knob.
//!
//! ## Failure Philosophy
//!
//! Best effort, never fail on unparsable log text. The only hard error is
//! [`JsonDecodeError::EmptyInput`]; any non-empty input produces a result,
//! falling back to returning the text as-is when no layer can be peeled.

use serde_json::Value;

use crate::error::JsonDecodeError;

/// Hard cap on peel iterations. Guarantees termination on pathological
/// input; must not be raised casually.
pub const MAX_PEEL_ITERATIONS: usize = 10;

/// Result of a successful normalization or auto-decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedJson {
    /// The fully-unescaped raw text, with no further peeling applied.
    pub decoded: String,
    /// Pretty-printed JSON rendering (2-space indent), or the raw text
    /// itself when it could not be parsed as JSON.
    pub formatted: String,
}

/// Peel layers of quoting/escaping from stringified JSON.
///
/// Each iteration inspects the current text:
///
/// - Quoted (`"…"` or `'…'`): parse as a JSON string literal. A string
///   value becomes the next layer; a non-string value ends normalization
///   with the still-quoted text as the raw result. A parse failure falls
///   back to manual unescaping.
/// - Unquoted: parse directly as JSON. Success ends normalization;
///   failure returns the current text as-is (best effort, not an error).
///
/// Exhausting [`MAX_PEEL_ITERATIONS`] also returns the current text
/// as-is — the cap is a safety valve, never an error.
///
/// # Errors
///
/// Returns [`JsonDecodeError::EmptyInput`] if the trimmed input is empty.
/// No other failure is possible.
pub fn normalize_escaped(input: &str) -> Result<DecodedJson, JsonDecodeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(JsonDecodeError::EmptyInput);
    }

    let mut current = trimmed.to_string();
    let mut trace = vec![current.clone()];

    for iteration in 0..MAX_PEEL_ITERATIONS {
        if is_quoted(&current) {
            match serde_json::from_str::<Value>(&current) {
                Ok(Value::String(inner)) => {
                    // Still a string literal: one layer peeled, keep going.
                    tracing::trace!(iteration, "peeled one stringification layer");
                    current = inner;
                    trace.push(current.clone());
                }
                Ok(parsed) => {
                    return Ok(DecodedJson {
                        decoded: current,
                        formatted: pretty_print(&parsed),
                    });
                }
                Err(_) => {
                    // Not a valid string literal; strip quotes and escapes
                    // by hand and try again on the result.
                    tracing::debug!(iteration, "string-literal parse failed, manual unescape");
                    current = manual_unescape(&current);
                    trace.push(current.clone());
                }
            }
        } else {
            return match serde_json::from_str::<Value>(&current) {
                Ok(parsed) => Ok(DecodedJson {
                    formatted: pretty_print(&parsed),
                    decoded: current,
                }),
                // Cannot parse further: return the last peeled form as-is.
                Err(_) => Ok(DecodedJson {
                    formatted: current.clone(),
                    decoded: current,
                }),
            };
        }
    }

    tracing::debug!(
        layers = trace.len(),
        "iteration cap reached, returning current text"
    );
    Ok(DecodedJson {
        formatted: current.clone(),
        decoded: current,
    })
}

/// True if the text starts and ends with a matching quote pair.
fn is_quoted(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2
        && ((bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[bytes.len() - 1] == b'\''))
}

/// Strip one layer of surrounding quotes and replace common escape
/// sequences by hand. Used only when JSON string-literal parsing fails.
///
/// The replacement order is fixed: `\n`, `\r`, `\t`, `\"`, `\'` first,
/// `\\` last.
fn manual_unescape(s: &str) -> String {
    let inner = if is_quoted(s) { &s[1..s.len() - 1] } else { s };
    inner
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
        .replace("\\\"", "\"")
        .replace("\\'", "'")
        .replace("\\\\", "\\")
}

/// Render a JSON value with 2-space indentation.
pub(crate) fn pretty_print(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
