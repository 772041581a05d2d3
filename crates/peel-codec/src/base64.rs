//! # Base64 / Base64URL Codec
//!
//! Standard Base64 encoding and strict decoding, plus Base64URL decoding
//! with padding repair. Base64URL is the JWT wire encoding: the URL-safe
//! alphabet (`-`/`_` instead of `+`/`/`) with padding omitted by producers.
//!
//! ## Padding Repair Rule
//!
//! Base64 groups encode 3 bytes as 4 characters, so a valid unpadded length
//! is never `4n + 1`:
//!
//! - `len % 4 == 1` — rejected, no padding can repair it.
//! - `len % 4 == 2` — append `==`.
//! - `len % 4 == 3` — append `=`.
//! - `len % 4 == 0` — already a full group, nothing to add.
//!
//! After remapping and repair, Base64URL decoding delegates to the strict
//! standard decoder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CodecError;

/// Encode text to standard Base64 (`A–Z a–z 0–9 + /`, `=` padding).
///
/// Encodes the UTF-8 byte representation of `text`. Encoding cannot fail,
/// so this returns `String` directly rather than a `Result`.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 to raw bytes.
///
/// Strict: characters outside the standard alphabet, incorrect padding,
/// and invalid lengths are all rejected.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if the input is not valid
/// standard Base64.
pub fn decode_base64_bytes(encoded: &str) -> Result<Vec<u8>, CodecError> {
    STANDARD
        .decode(encoded)
        .map_err(|e| CodecError::InvalidEncoding(e.to_string()))
}

/// Decode standard Base64 to a UTF-8 string.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if the input is not valid
/// Base64, or [`CodecError::InvalidUtf8`] if the decoded bytes are not
/// valid UTF-8 text.
pub fn decode_base64(encoded: &str) -> Result<String, CodecError> {
    let bytes = decode_base64_bytes(encoded)?;
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8(e.to_string()))
}

/// Decode Base64URL to raw bytes.
///
/// Remaps the URL-safe alphabet to the standard one, repairs omitted
/// padding, and delegates to [`decode_base64_bytes`].
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if the input length is `4n + 1`
/// (unrepairable) or the remapped input is not valid Base64.
pub fn decode_base64_url_bytes(encoded: &str) -> Result<Vec<u8>, CodecError> {
    decode_base64_bytes(&remap_and_pad(encoded)?)
}

/// Decode Base64URL to a UTF-8 string.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] for alphabet/padding/length
/// violations, or [`CodecError::InvalidUtf8`] if the decoded bytes are
/// not valid UTF-8 text.
pub fn decode_base64_url(encoded: &str) -> Result<String, CodecError> {
    decode_base64(&remap_and_pad(encoded)?)
}

/// Remap `-`→`+` and `_`→`/`, then repair omitted padding.
fn remap_and_pad(encoded: &str) -> Result<String, CodecError> {
    let mut remapped = encoded.replace('-', "+").replace('_', "/");
    match remapped.len() % 4 {
        1 => {
            return Err(CodecError::InvalidEncoding(format!(
                "length {} is 4n+1, which no padding can repair",
                remapped.len()
            )))
        }
        2 => remapped.push_str("=="),
        3 => remapped.push('='),
        _ => {}
    }
    Ok(remapped)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Encoding then decoding returns the original text.
        #[test]
        fn roundtrip_any_text(text in "\\PC{0,200}") {
            let encoded = encode_base64(&text);
            prop_assert_eq!(decode_base64(&encoded).unwrap(), text);
        }

        /// Decoding never panics on arbitrary input.
        #[test]
        fn decode_never_panics(input in "\\PC{0,200}") {
            let _ = decode_base64(&input);
            let _ = decode_base64_url(&input);
        }

        /// Any input of length 4n+1 is rejected by the URL decoder.
        #[test]
        fn length_4n_plus_1_always_rejected(
            body in "[A-Za-z0-9_-]{0,50}",
            last in "[A-Za-z0-9_-]"
        ) {
            let mut input = body;
            while input.len() % 4 != 0 {
                input.push('A');
            }
            input.push_str(&last);
            let err = decode_base64_url(&input).unwrap_err();
            prop_assert!(matches!(err, CodecError::InvalidEncoding(_)));
        }

        /// Unpadded URL-safe encodings decode to the same bytes as their
        /// padded standard equivalents.
        #[test]
        fn url_decode_matches_standard(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
            let standard = STANDARD.encode(&bytes);
            let url_safe = standard
                .replace('+', "-")
                .replace('/', "_")
                .replace('=', "");
            prop_assert_eq!(decode_base64_url_bytes(&url_safe).unwrap(), bytes);
        }
    }
}
