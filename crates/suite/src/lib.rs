//! Ed25519VerificationKey2020 key-pair suite
//!
//! Implements the multibase/multicodec key representation used by Linked
//! Data Proof suites and DID documents, together with lossless conversion
//! to and from the legacy `Ed25519VerificationKey2018` base58 format and
//! `JsonWebKey2020`.
//!
//! The canonical form of a key is its multibase string: the `'z'` base58-btc
//! marker followed by a 2-byte multicodec header and the raw key bytes. A key
//! pair stores only these strings; raw byte buffers are derived views, never
//! independent state.
//!
//! ```no_run
//! use ed25519_multikey_suite::{Ed25519KeyPair, KeyPairOptions};
//! use ed25519_multikey_api::{Signer, Verifier};
//! use rand::rngs::OsRng;
//!
//! # fn main() -> ed25519_multikey_api::Result<()> {
//! let key: Ed25519KeyPair = Ed25519KeyPair::generate(
//!     &mut OsRng,
//!     KeyPairOptions {
//!         controller: Some("did:example:1234".into()),
//!         ..Default::default()
//!     },
//! )?;
//! let signature = key.signer().sign(b"hello")?;
//! assert!(key.verifier().verify(b"hello", &signature)?);
//! # Ok(())
//! # }
//! ```

pub mod jwk;
pub mod key2018;
pub mod keypair;
pub mod multibase;
pub mod multicodec;
pub mod proof;
pub mod serialized;
pub mod validators;

pub use jwk::{Jwk, JsonWebKey2020};
pub use key2018::VerificationKey2018;
pub use keypair::{Ed25519KeyPair, ExportOptions, KeyPairOptions};
pub use proof::{Ed25519Signer, Ed25519Verifier};
pub use serialized::{ExportedKeyPair, SerializedKeyPair};

/// Suite identifier carried in the `type` field of exported keys
pub const SUITE_ID: &str = "Ed25519VerificationKey2020";

/// JSON-LD context for this suite
pub const SUITE_CONTEXT: &str = "https://w3id.org/security/suites/ed25519-2020/v1";
