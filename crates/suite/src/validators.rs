//! Structural validation helpers

use ed25519_multikey_api::{Error, Result};

/// Byte-for-byte buffer comparison
///
/// WARNING: this comparison is not timing-safe and must only ever be used on
/// public values such as public keys and fingerprints. Comparing secret key
/// material with it is a security defect.
pub fn buffer_equals(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            return false;
        }
    }
    true
}

/// Assert that `bytes` is exactly `expected` bytes long
///
/// The `code` names the failing field and is carried as the error context.
pub fn assert_key_bytes(bytes: &[u8], expected: usize, code: &'static str) -> Result<()> {
    if bytes.len() != expected {
        return Err(Error::InvalidLength {
            context: code,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
