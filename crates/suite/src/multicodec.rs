//! Multicodec varint headers for Ed25519 key material
//!
//! The header values are fixed by the multicodec registry and must not be
//! altered: `ed25519-pub` is `0xed` encoded as the varint `[0xed, 0x01]`,
//! `ed25519-priv` is `0x1300` encoded as `[0x80, 0x26]`.

/// Multicodec ed25519-pub header
pub const ED25519_PUB_HEADER: [u8; 2] = [0xed, 0x01];

/// Multicodec ed25519-priv header
pub const ED25519_PRIV_HEADER: [u8; 2] = [0x80, 0x26];

/// Prefix `key` with a multicodec header
pub fn attach_header(header: &[u8], key: &[u8]) -> Vec<u8> {
    let mut tagged = Vec::with_capacity(header.len() + key.len());
    tagged.extend_from_slice(header);
    tagged.extend_from_slice(key);
    tagged
}

/// Check whether `bytes` starts with the expected multicodec header
///
/// Returns false on any mismatch, including input shorter than the header.
pub fn has_header(bytes: &[u8], expected: &[u8]) -> bool {
    bytes.len() >= expected.len() && &bytes[..expected.len()] == expected
}
