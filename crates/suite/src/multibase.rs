//! Multibase base58-btc envelope
//!
//! Only the `'z'` (base58-btc) encoding is supported; every key string this
//! suite produces or consumes carries that marker.

use ed25519_multikey_api::{Error, Result};

/// Multibase marker identifying base58-btc encoded data
pub const BASE58_BTC_MARKER: char = 'z';

/// Encode bytes as a multibase base58-btc string
pub fn encode(bytes: &[u8]) -> String {
    format!("{}{}", BASE58_BTC_MARKER, bs58::encode(bytes).into_string())
}

/// Decode a multibase base58-btc string
///
/// Fails with a [`Error::Format`] when the string is empty, does not carry
/// the `'z'` marker, or the remainder is not valid base58-btc.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut chars = text.chars();
    match chars.next() {
        Some(BASE58_BTC_MARKER) => {}
        _ => {
            return Err(Error::format(
                "multibase",
                "must be a multibase base58-btc encoded string",
            ))
        }
    }
    bs58::decode(chars.as_str())
        .into_vec()
        .map_err(|e| Error::format("multibase", e.to_string()))
}
