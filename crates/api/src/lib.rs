//! Public API traits and types for the ed25519-multikey workspace
//!
//! This crate provides the shared API surface for the key suite: the error
//! type, the primitive-operation provider trait, the signer/verifier
//! capability traits, and the common value types exchanged between crates.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{FingerprintVerification, RawKeyPair};

pub use traits::{Ed25519Provider, Signer, Verifier};
