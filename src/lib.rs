//! Ed25519 verifiable key pairs for Linked Data Proofs and DID documents
//!
//! This is the main crate that re-exports the key suite, the provider
//! traits, and the default ed25519-dalek backed primitive provider.
//!
//! The canonical key representation is a multibase string: the `'z'`
//! base58-btc marker followed by a 2-byte multicodec header and the raw key
//! bytes. The suite converts losslessly to and from the legacy
//! `Ed25519VerificationKey2018` and `JsonWebKey2020` formats.

/// Re-exports commonly used items
pub mod prelude {
    pub use ed25519_multikey_api::{
        Ed25519Provider, Error, FingerprintVerification, Result, Signer, Verifier,
    };
    pub use ed25519_multikey_primitives::Ed25519;
    pub use ed25519_multikey_suite::{
        Ed25519KeyPair, Ed25519Signer, Ed25519Verifier, ExportOptions, ExportedKeyPair,
        JsonWebKey2020, Jwk, KeyPairOptions, SerializedKeyPair, VerificationKey2018,
        SUITE_CONTEXT, SUITE_ID,
    };
}

// Re-exports
pub use ed25519_multikey_api as api;
pub use ed25519_multikey_primitives as primitives;
pub use ed25519_multikey_suite as suite;

pub use ed25519_multikey_api::{Error, Result, Signer, Verifier};
pub use ed25519_multikey_suite::{
    Ed25519KeyPair, ExportOptions, KeyPairOptions, SerializedKeyPair, SUITE_CONTEXT, SUITE_ID,
};
