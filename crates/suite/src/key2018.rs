//! Conversion to and from the legacy `Ed25519VerificationKey2018` format
//!
//! The 2018 suite predates multicodec tagging: keys are raw bytes encoded as
//! plain base58-btc, with no header and no multibase marker. Import re-tags
//! the bytes into the canonical form; export strips back down.

use ed25519_multikey_api::{Ed25519Provider, Error, Result};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::keypair::{encode_multibase_key, Ed25519KeyPair, ExportOptions, KeyPairOptions};
use crate::multicodec::{ED25519_PRIV_HEADER, ED25519_PUB_HEADER};

/// Suite identifier of the legacy format
pub const SUITE_ID_2018: &str = "Ed25519VerificationKey2018";

/// JSON-LD context of the legacy format
pub const SUITE_CONTEXT_2018: &str = "https://w3id.org/security/suites/ed25519-2018/v1";

/// Serialized form of a legacy 2018 key pair
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationKey2018 {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none", default)]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// Suite identifier, `Ed25519VerificationKey2018`
    #[serde(rename = "type")]
    pub key_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub controller: Option<String>,
    /// Raw public key bytes, plain base58-btc
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub public_key_base58: Option<String>,
    /// Raw 64-byte private key, plain base58-btc
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub private_key_base58: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revoked: Option<String>,
}

fn decode_base58(field: &'static str, text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| Error::format(field, e.to_string()))
}

impl<P: Ed25519Provider> Ed25519KeyPair<P> {
    /// Import a legacy 2018 key pair
    ///
    /// Decodes the plain base58 fields and re-tags them with their
    /// multicodec headers; no length validation beyond what the canonical
    /// constructor performs.
    pub fn from_ed25519_verification_key_2018(record: &VerificationKey2018) -> Result<Self> {
        let public_key_base58 = record
            .public_key_base58
            .as_deref()
            .ok_or_else(|| Error::validation("publicKeyBase58", "property is required"))?;
        let public_key_multibase = encode_multibase_key(
            &ED25519_PUB_HEADER,
            &decode_base58("publicKeyBase58", public_key_base58)?,
        );

        let private_key_multibase = match record.private_key_base58.as_deref() {
            None => None,
            Some(private_key_base58) => {
                let raw = Zeroizing::new(decode_base58("privateKeyBase58", private_key_base58)?);
                Some(encode_multibase_key(&ED25519_PRIV_HEADER, &raw))
            }
        };

        Self::new(KeyPairOptions {
            id: record.id.clone(),
            controller: record.controller.clone(),
            revoked: record.revoked.clone(),
            public_key_multibase: Some(public_key_multibase),
            private_key_multibase,
        })
    }

    /// Export this key pair in the legacy 2018 format
    pub fn to_ed25519_verification_key_2018(
        &self,
        options: ExportOptions,
    ) -> Result<VerificationKey2018> {
        if !(options.public_key || options.private_key) {
            return Err(Error::validation(
                "export",
                "Export requires specifying either \"publicKey\" or \"privateKey\"",
            ));
        }

        let mut record = VerificationKey2018 {
            context: options
                .include_context
                .then(|| SUITE_CONTEXT_2018.to_owned()),
            id: self.id().map(str::to_owned),
            key_type: SUITE_ID_2018.to_owned(),
            controller: self.controller().map(str::to_owned),
            public_key_base58: None,
            private_key_base58: None,
            revoked: self.revoked().map(str::to_owned),
        };

        if options.public_key {
            record.public_key_base58 =
                Some(bs58::encode(self.public_key_bytes()?).into_string());
        }
        if options.private_key {
            if let Some(private_key_bytes) = self.private_key_bytes()? {
                record.private_key_base58 =
                    Some(bs58::encode(&private_key_bytes[..]).into_string());
            }
        }

        Ok(record)
    }
}
