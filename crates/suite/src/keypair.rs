//! The Ed25519 key-pair entity
//!
//! A [`Ed25519KeyPair`] owns its key material in canonical multibase form:
//! `publicKeyMultibase` is always present, `privateKeyMultibase` only for
//! signing-capable pairs. Raw byte buffers are decoded from these strings on
//! demand and never stored alongside them.

use core::fmt;
use core::marker::PhantomData;

use ed25519_multikey_api::{
    Ed25519Provider, Error, FingerprintVerification, RawKeyPair, Result,
};
use ed25519_multikey_primitives::Ed25519;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::multibase;
use crate::multicodec::{self, ED25519_PRIV_HEADER, ED25519_PUB_HEADER};
use crate::serialized::ExportedKeyPair;
use crate::validators::{assert_key_bytes, buffer_equals};
use crate::{SUITE_CONTEXT, SUITE_ID};

/// Seed length accepted by [`Ed25519KeyPair::from_seed`]
pub const SEED_LENGTH: usize = 32;

/// Decoded public key length: 2-byte multicodec header plus 32 key bytes
const TAGGED_PUBLIC_KEY_LENGTH: usize = 34;

/// Decoded private key length: 2-byte multicodec header plus 64 key bytes
const TAGGED_PRIVATE_KEY_LENGTH: usize = 66;

/// Construction inputs for a key pair
///
/// `public_key_multibase` is required by [`Ed25519KeyPair::new`]; the
/// generation constructors fill in both key fields themselves.
#[derive(Clone, Debug, Default)]
pub struct KeyPairOptions {
    /// Key identifier, typically `<controller>#<fingerprint>`
    pub id: Option<String>,
    /// Entity that controls this key (a DID or document URL)
    pub controller: Option<String>,
    /// RFC 3339 timestamp of key revocation; informational only
    pub revoked: Option<String>,
    /// Multibase public key with the multicodec ed25519-pub header
    pub public_key_multibase: Option<String>,
    /// Multibase private key with the multicodec ed25519-priv header
    pub private_key_multibase: Option<String>,
}

/// Flags controlling what an export contains
#[derive(Clone, Copy, Debug, Default)]
pub struct ExportOptions {
    /// Include public key material
    pub public_key: bool,
    /// Include private key material
    pub private_key: bool,
    /// Include the suite's JSON-LD context tag
    pub include_context: bool,
}

impl ExportOptions {
    /// Public key only, no context
    pub fn public() -> Self {
        Self {
            public_key: true,
            ..Self::default()
        }
    }

    /// Public and private key, no context
    pub fn full() -> Self {
        Self {
            public_key: true,
            private_key: true,
            include_context: false,
        }
    }
}

/// An Ed25519VerificationKey2020 key pair
///
/// Generic over the primitive-operation provider; the default is the
/// `ed25519-dalek` backed [`Ed25519`] provider.
pub struct Ed25519KeyPair<P: Ed25519Provider = Ed25519> {
    id: Option<String>,
    controller: Option<String>,
    revoked: Option<String>,
    public_key_multibase: String,
    private_key_multibase: Option<String>,
    _provider: PhantomData<P>,
}

/// Multibase-encode a multicodec-tagged key
pub(crate) fn encode_multibase_key(header: &[u8], key: &[u8]) -> String {
    multibase::encode(&multicodec::attach_header(header, key))
}

/// Decode a multibase key string, requiring the expected multicodec header
///
/// Returns `None` on decode failure or a header mismatch; the caller turns
/// that into its field-specific validation error.
fn decode_tagged_key(key: &str, header: &[u8]) -> Option<Zeroizing<Vec<u8>>> {
    multibase::decode(key)
        .ok()
        .filter(|bytes| multicodec::has_header(bytes, header))
        .map(Zeroizing::new)
}

impl<P: Ed25519Provider> Ed25519KeyPair<P> {
    /// Construct a key pair from already-encoded fields
    ///
    /// Validates that the public key is present and that both keys carry
    /// their multicodec headers and exact decoded lengths. When `controller`
    /// is given without `id`, the id is derived as
    /// `<controller>#<fingerprint>`.
    pub fn new(options: KeyPairOptions) -> Result<Self> {
        let public_key_multibase = options.public_key_multibase.ok_or_else(|| {
            Error::validation("publicKeyMultibase", "property is required")
        })?;

        let decoded_public = decode_tagged_key(&public_key_multibase, &ED25519_PUB_HEADER)
            .ok_or_else(|| {
                Error::validation(
                    "publicKeyMultibase",
                    format!("has invalid header bytes: \"{public_key_multibase}\""),
                )
            })?;
        assert_key_bytes(
            &decoded_public,
            TAGGED_PUBLIC_KEY_LENGTH,
            "invalidPublicKeyLength",
        )?;

        if let Some(private_key_multibase) = &options.private_key_multibase {
            let decoded_private = decode_tagged_key(private_key_multibase, &ED25519_PRIV_HEADER)
                .ok_or_else(|| {
                    Error::validation("privateKeyMultibase", "has invalid header bytes")
                })?;
            assert_key_bytes(
                &decoded_private,
                TAGGED_PRIVATE_KEY_LENGTH,
                "invalidPrivateKeyLength",
            )?;
        }

        let id = match (&options.id, &options.controller) {
            (None, Some(controller)) => Some(format!("{controller}#{public_key_multibase}")),
            _ => options.id,
        };

        Ok(Self {
            id,
            controller: options.controller,
            revoked: options.revoked,
            public_key_multibase,
            private_key_multibase: options.private_key_multibase,
            _provider: PhantomData,
        })
    }

    /// Generate a key pair from fresh entropy
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R, options: KeyPairOptions) -> Result<Self> {
        Self::from_raw(&P::generate_keypair(rng)?, options)
    }

    /// Derive a key pair from a 32-byte seed, deterministically
    pub fn from_seed(seed: &[u8], options: KeyPairOptions) -> Result<Self> {
        assert_key_bytes(seed, SEED_LENGTH, "invalidSeedLength")?;
        Self::from_raw(&P::keypair_from_seed(seed)?, options)
    }

    fn from_raw(raw: &RawKeyPair, mut options: KeyPairOptions) -> Result<Self> {
        options.public_key_multibase =
            Some(encode_multibase_key(&ED25519_PUB_HEADER, &raw.public_key));
        options.private_key_multibase =
            Some(encode_multibase_key(&ED25519_PRIV_HEADER, &raw.secret_key));
        Self::new(options)
    }

    /// Construct a public-only key pair from a fingerprint
    pub fn from_fingerprint(fingerprint: &str) -> Result<Self> {
        Self::new(KeyPairOptions {
            public_key_multibase: Some(fingerprint.to_owned()),
            ..Default::default()
        })
    }

    /// Key identifier, if set
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the key identifier
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Controlling entity, if set
    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    /// Revocation timestamp, if set
    pub fn revoked(&self) -> Option<&str> {
        self.revoked.as_deref()
    }

    /// Mark the key as revoked at the given RFC 3339 timestamp
    ///
    /// Informational only: signing and verification are not refused for
    /// revoked keys, callers enforce revocation policy themselves.
    pub fn set_revoked(&mut self, revoked: impl Into<String>) {
        self.revoked = Some(revoked.into());
    }

    /// Suite identifier carried as the `type` of exported keys
    pub fn key_type(&self) -> &'static str {
        SUITE_ID
    }

    /// Canonical multibase public key string
    pub fn public_key_multibase(&self) -> &str {
        &self.public_key_multibase
    }

    /// Canonical multibase private key string, if present
    pub fn private_key_multibase(&self) -> Option<&str> {
        self.private_key_multibase.as_deref()
    }

    /// Raw 32-byte public key, decoded from the canonical string
    pub fn public_key_bytes(&self) -> Result<Vec<u8>> {
        let decoded = multibase::decode(&self.public_key_multibase)?;
        Ok(decoded[ED25519_PUB_HEADER.len()..].to_vec())
    }

    /// Raw 64-byte private key (`seed || public key`), if present
    pub(crate) fn private_key_bytes(&self) -> Result<Option<Zeroizing<Vec<u8>>>> {
        match &self.private_key_multibase {
            None => Ok(None),
            Some(encoded) => {
                let decoded = Zeroizing::new(multibase::decode(encoded)?);
                Ok(Some(Zeroizing::new(
                    decoded[ED25519_PRIV_HEADER.len()..].to_vec(),
                )))
            }
        }
    }

    /// The key's fingerprint: the canonical multibase public key string
    pub fn fingerprint(&self) -> &str {
        &self.public_key_multibase
    }

    /// Check whether a fingerprint matches this key pair
    ///
    /// Fingerprints are routinely checked against untrusted input, so this
    /// never returns `Err`: every failure mode is reported inside the
    /// returned [`FingerprintVerification`].
    pub fn verify_fingerprint(&self, fingerprint: &str) -> FingerprintVerification {
        if !fingerprint.starts_with(multibase::BASE58_BTC_MARKER) {
            return FingerprintVerification::failed(Error::format(
                "fingerprint",
                "\"fingerprint\" must be a multibase encoded string",
            ));
        }

        let fingerprint_bytes = match multibase::decode(fingerprint) {
            Ok(bytes) => bytes,
            Err(error) => return FingerprintVerification::failed(error),
        };
        let public_key_bytes = match self.public_key_bytes() {
            Ok(bytes) => bytes,
            Err(error) => return FingerprintVerification::failed(error),
        };

        let header_matches = multicodec::has_header(&fingerprint_bytes, &ED25519_PUB_HEADER);
        let body_matches = fingerprint_bytes
            .get(ED25519_PUB_HEADER.len()..)
            // public keys and fingerprints only; not safe for secrets
            .map(|body| buffer_equals(&public_key_bytes, body))
            .unwrap_or(false);

        if header_matches && body_matches {
            FingerprintVerification::ok()
        } else {
            FingerprintVerification::failed(Error::format(
                "fingerprint",
                "Invalid fingerprint encoding (expecting 0xed01 byte prefix)",
            ))
        }
    }

    /// Export the serialized representation of this key pair
    ///
    /// Field presence is conditional: unset fields are absent from the
    /// record, never emitted as null or empty.
    pub fn export(&self, options: ExportOptions) -> Result<ExportedKeyPair> {
        if !(options.public_key || options.private_key) {
            return Err(Error::validation(
                "export",
                "Export requires specifying either \"publicKey\" or \"privateKey\"",
            ));
        }
        Ok(ExportedKeyPair {
            context: options
                .include_context
                .then(|| SUITE_CONTEXT.to_owned()),
            id: self.id.clone(),
            key_type: SUITE_ID.to_owned(),
            controller: self.controller.clone(),
            public_key_multibase: options
                .public_key
                .then(|| self.public_key_multibase.clone()),
            private_key_multibase: if options.private_key {
                self.private_key_multibase.clone()
            } else {
                None
            },
            revoked: self.revoked.clone(),
        })
    }
}

impl<P: Ed25519Provider> Clone for Ed25519KeyPair<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            controller: self.controller.clone(),
            revoked: self.revoked.clone(),
            public_key_multibase: self.public_key_multibase.clone(),
            private_key_multibase: self.private_key_multibase.clone(),
            _provider: PhantomData,
        }
    }
}

impl<P: Ed25519Provider> fmt::Debug for Ed25519KeyPair<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519KeyPair")
            .field("id", &self.id)
            .field("controller", &self.controller)
            .field("revoked", &self.revoked)
            .field("public_key_multibase", &self.public_key_multibase)
            .field(
                "private_key_multibase",
                &self.private_key_multibase.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
