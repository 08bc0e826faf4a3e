//! Capability traits for primitive operations and proof creation
//!
//! The key suite never performs curve arithmetic itself: every cryptographic
//! operation is forwarded through [`Ed25519Provider`]. Signing and
//! verification capabilities handed to proof layers are expressed as the
//! object-safe [`Signer`] and [`Verifier`] traits.

use crate::error::Result;
use crate::types::RawKeyPair;
use rand::{CryptoRng, RngCore};

/// Primitive-operation provider for the Ed25519 scheme
///
/// Implementations wrap an actual curve implementation and a SHA-256 digest.
/// All operations are byte-in/byte-out; the suite owns the encoded key
/// representations and only hands raw buffers across this boundary.
pub trait Ed25519Provider {
    /// Name of the backing implementation, for diagnostics
    fn name() -> &'static str;

    /// Generate a key pair from fresh entropy
    ///
    /// The transient seed drawn from `rng` must be zeroized immediately after
    /// the key material is derived.
    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<RawKeyPair>;

    /// Derive a key pair from a 32-byte seed, deterministically
    ///
    /// Identical seeds must always yield identical key pairs.
    fn keypair_from_seed(seed: &[u8]) -> Result<RawKeyPair>;

    /// Sign `message` with a 64-byte secret key (`seed || public key`),
    /// returning a 64-byte signature
    fn sign(secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>>;

    /// Verify a signature over `message` with a 32-byte public key
    ///
    /// A well-formed but non-matching signature verifies as `Ok(false)`.
    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool>;

    /// SHA-256 digest, used for JWK thumbprint computation
    fn sha256(data: &[u8]) -> [u8; 32];
}

/// Signing capability bound to one key's material
pub trait Signer {
    /// Identifier of the key that produced this signer, if set
    fn key_id(&self) -> Option<&str>;

    /// Sign `data`, returning the raw signature bytes
    ///
    /// Fails with [`crate::Error::KeyUnavailable`] when the key pair carries
    /// no private key. The check happens here rather than at construction so
    /// that public-only key pairs can still hand out verifiers freely.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Verification capability bound to one key's material
pub trait Verifier {
    /// Identifier of the key that produced this verifier, if set
    fn key_id(&self) -> Option<&str>;

    /// Verify `signature` over `data`
    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<bool>;
}
