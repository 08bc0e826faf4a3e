//! Default primitive-operation provider for the ed25519-multikey suite
//!
//! Wraps `ed25519-dalek` and `sha2` behind the byte-in/byte-out
//! [`Ed25519Provider`] trait. The provider deals only in raw buffers; all
//! multibase/multicodec encoding lives in the suite crate.

use ed25519_dalek::{Signature, Signer as DalekSigner, SigningKey, Verifier as DalekVerifier, VerifyingKey};
use ed25519_multikey_api::{Ed25519Provider, Error, RawKeyPair, Result};
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Seed length in bytes
pub const SEED_LENGTH: usize = 32;
/// Public key length in bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// Secret key length in bytes: `seed || public key`
pub const SECRET_KEY_LENGTH: usize = 64;
/// Signature length in bytes
pub const SIGNATURE_LENGTH: usize = 64;

/// Ed25519 provider backed by `ed25519-dalek`
pub struct Ed25519;

impl Ed25519 {
    fn signing_key_from_secret(secret_key: &[u8]) -> Result<SigningKey> {
        if secret_key.len() != SECRET_KEY_LENGTH {
            return Err(Error::InvalidLength {
                context: "invalidPrivateKeyLength",
                expected: SECRET_KEY_LENGTH,
                actual: secret_key.len(),
            });
        }
        // Only the seed half feeds the signing key; the trailing public half
        // is re-derived by dalek.
        let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
        seed.copy_from_slice(&secret_key[..SEED_LENGTH]);
        Ok(SigningKey::from_bytes(&seed))
    }
}

impl Ed25519Provider for Ed25519 {
    fn name() -> &'static str {
        "ed25519-dalek"
    }

    fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<RawKeyPair> {
        // The transient seed is zeroized as soon as derivation completes.
        let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
        rng.fill_bytes(seed.as_mut());
        Self::keypair_from_seed(seed.as_ref())
    }

    fn keypair_from_seed(seed: &[u8]) -> Result<RawKeyPair> {
        let seed: &[u8; SEED_LENGTH] = seed.try_into().map_err(|_| Error::InvalidLength {
            context: "invalidSeedLength",
            expected: SEED_LENGTH,
            actual: seed.len(),
        })?;
        let signing_key = SigningKey::from_bytes(seed);
        let public_key = signing_key.verifying_key().to_bytes();

        let mut secret_key = Zeroizing::new(Vec::with_capacity(SECRET_KEY_LENGTH));
        secret_key.extend_from_slice(seed);
        secret_key.extend_from_slice(&public_key);

        Ok(RawKeyPair {
            public_key: public_key.to_vec(),
            secret_key,
        })
    }

    fn sign(secret_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let signing_key = Self::signing_key_from_secret(secret_key)?;
        Ok(signing_key.sign(message).to_bytes().to_vec())
    }

    fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        let public_key: &[u8; PUBLIC_KEY_LENGTH] =
            public_key.try_into().map_err(|_| Error::InvalidLength {
                context: "invalidPublicKeyLength",
                expected: PUBLIC_KEY_LENGTH,
                actual: public_key.len(),
            })?;
        let verifying_key = VerifyingKey::from_bytes(public_key)
            .map_err(|e| Error::validation("publicKey", e.to_string()))?;

        // A signature of the wrong shape is a routine mismatch, not an error.
        let signature: [u8; SIGNATURE_LENGTH] = match signature.try_into() {
            Ok(bytes) => bytes,
            Err(_) => return Ok(false),
        };
        let signature = Signature::from_bytes(&signature);
        Ok(verifying_key.verify(message, &signature).is_ok())
    }

    fn sha256(data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }
}
