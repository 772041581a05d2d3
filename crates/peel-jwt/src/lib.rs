//! # peel-jwt — JWT Structural Decoder
//!
//! Decodes a JWT into its header, payload, and raw signature segment.
//! Strictly structural: the signature is never verified, so a successful
//! decode says nothing about authenticity. Claims helpers derive display
//! strings and expiry facts from an already-decoded payload.
//!
//! ## Crate Policy
//!
//! - Depends only on `peel-codec` internally (Base64URL wire decoding).
//! - Strict gating: the first failing decode step aborts with no partial
//!   document.
//! - No `unsafe`, no `panic!()`/`.unwrap()` outside tests.

pub mod claims;
pub mod error;
pub mod token;

pub use claims::{format_timestamp, is_expired};
pub use error::JwtError;
pub use token::{decode_jwt, JwtDocument};
