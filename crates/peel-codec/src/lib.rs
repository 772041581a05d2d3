//! # peel-codec — Byte/Text Codec
//!
//! Leaf crate of the peel toolbox. Provides standard Base64 encoding and
//! strict decoding, plus Base64URL decoding with the padding-repair rule
//! JWT producers rely on (padding is omitted on the wire).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `peel-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests — every decode returns
//!   a structured [`CodecError`].

pub mod base64;
pub mod error;

pub use self::base64::{
    decode_base64, decode_base64_bytes, decode_base64_url, decode_base64_url_bytes, encode_base64,
};
pub use error::CodecError;
