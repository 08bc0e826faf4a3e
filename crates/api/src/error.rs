//! Error types for key encoding and signature operations

use thiserror::Error;

/// Primary error type for key construction, conversion, and signing
///
/// Constructors and exporters fail fast with these errors. The one deliberate
/// exception is fingerprint verification, which reports failures through
/// [`crate::types::FingerprintVerification`] because it is routinely invoked
/// on untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed or missing required input: absent field, wrong multicodec
    /// header, wrong `kty`/`crv` discriminator
    #[error("{context}: {message}")]
    Validation {
        context: &'static str,
        message: String,
    },

    /// Byte sequence of the wrong length; `context` carries the error code
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed encoded string: missing multibase marker, invalid alphabet
    /// character
    #[error("{context}: {message}")]
    Format {
        context: &'static str,
        message: String,
    },

    /// Operation requires key material not present on this instance
    #[error("A {context} key is not available")]
    KeyUnavailable { context: &'static str },

    /// JSON serialization or deserialization failed
    #[error("{context}: {message}")]
    Serialization {
        context: &'static str,
        message: String,
    },
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with an owned message
    pub fn validation(context: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::Format`] with an owned message
    pub fn format(context: &'static str, message: impl Into<String>) -> Self {
        Self::Format {
            context,
            message: message.into(),
        }
    }
}

/// Result type for key operations
pub type Result<T> = core::result::Result<T, Error>;
