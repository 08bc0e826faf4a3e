//! Signing and verification capabilities derived from a key pair
//!
//! A [`Ed25519Signer`] or [`Ed25519Verifier`] decodes the key material once
//! at construction and then signs or verifies any number of messages without
//! touching the multibase forms again. Construction never fails: a
//! public-only key pair yields a signer whose calls fail with
//! [`Error::KeyUnavailable`], matching the capability traits' contract.

use ed25519_multikey_api::{Ed25519Provider, Error, Result, Signer, Verifier};
use zeroize::Zeroizing;

use crate::keypair::Ed25519KeyPair;

/// A [`Signer`] holding one key pair's decoded private key
pub struct Ed25519Signer<P: Ed25519Provider> {
    key_id: Option<String>,
    secret_key: Option<Zeroizing<Vec<u8>>>,
    _provider: core::marker::PhantomData<P>,
}

/// A [`Verifier`] holding one key pair's decoded public key
pub struct Ed25519Verifier<P: Ed25519Provider> {
    key_id: Option<String>,
    public_key: Option<Vec<u8>>,
    _provider: core::marker::PhantomData<P>,
}

impl<P: Ed25519Provider> Ed25519KeyPair<P> {
    /// Create a signer over this key pair's private key
    pub fn signer(&self) -> Ed25519Signer<P> {
        Ed25519Signer {
            key_id: self.id().map(str::to_owned),
            // decode failures surface as KeyUnavailable at call time
            secret_key: self.private_key_bytes().ok().flatten(),
            _provider: core::marker::PhantomData,
        }
    }

    /// Create a verifier over this key pair's public key
    pub fn verifier(&self) -> Ed25519Verifier<P> {
        Ed25519Verifier {
            key_id: self.id().map(str::to_owned),
            public_key: self.public_key_bytes().ok(),
            _provider: core::marker::PhantomData,
        }
    }
}

impl<P: Ed25519Provider> Signer for Ed25519Signer<P> {
    fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let secret_key = self
            .secret_key
            .as_ref()
            .ok_or(Error::KeyUnavailable { context: "private" })?;
        P::sign(secret_key, data)
    }
}

impl<P: Ed25519Provider> Verifier for Ed25519Verifier<P> {
    fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    fn verify(&self, data: &[u8], signature: &[u8]) -> Result<bool> {
        let public_key = self
            .public_key
            .as_ref()
            .ok_or(Error::KeyUnavailable { context: "public" })?;
        P::verify(public_key, data, signature)
    }
}
