//! Shared value types exchanged between the suite and the primitive provider

use crate::error::Error;
use core::fmt;
use zeroize::Zeroizing;

/// Raw key material produced by a primitive-operation provider
///
/// The 64-byte secret key convention is `seed (32 bytes) || public key
/// (32 bytes)`; the format converters rely on this layout.
pub struct RawKeyPair {
    /// 32-byte Ed25519 public key
    pub public_key: Vec<u8>,
    /// 64-byte secret key, zeroized on drop
    pub secret_key: Zeroizing<Vec<u8>>,
}

impl fmt::Debug for RawKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawKeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Outcome of verifying a key fingerprint against a key pair
///
/// Fingerprints arrive from untrusted input, so every failure mode is carried
/// in this value instead of an `Err` return: mismatches are a routine result,
/// not an exceptional control path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintVerification {
    /// True only when the multicodec header and the key bytes both match
    pub verified: bool,
    /// Set whenever `verified` is false
    pub error: Option<Error>,
}

impl FingerprintVerification {
    /// A successful verification
    pub fn ok() -> Self {
        Self {
            verified: true,
            error: None,
        }
    }

    /// A failed verification carrying its cause
    pub fn failed(error: Error) -> Self {
        Self {
            verified: false,
            error: Some(error),
        }
    }
}
