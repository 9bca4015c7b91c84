//! Access-token payload decoding
//!
//! The upstream API issues compact tokens of three dot-separated base64url
//! segments (header.payload.signature). This module decodes the payload
//! segment only. No signature verification happens here on purpose: the
//! upstream validates the bearer on every API call and remains the sole
//! authority. The decoded claims are a local hint used for routing, nothing
//! more.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

/// Claims carried in a credential's payload segment
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<u64>,
}

impl Claims {
    /// The role claim, if present and non-empty.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|role| !role.is_empty())
    }
}

/// Decode the payload segment of a compact token.
///
/// Returns `None` for any malformed input: wrong segment count, invalid
/// base64url, or a payload that is not valid JSON. Decoding failure is a
/// normal state here, never an error; it must not break navigation.
pub fn decode_token(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    // Tolerate padded emitters
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}
