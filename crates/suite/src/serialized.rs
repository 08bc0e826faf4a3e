//! Serialized key-pair records and the format dispatcher
//!
//! Three wire shapes exist for an Ed25519 key pair: the canonical 2020
//! multibase record, the legacy 2018 base58 record, and the JsonWebKey2020
//! wrapper. [`SerializedKeyPair`] is the tagged union over the three;
//! dispatch is a pure match over the record's `type` field.

use ed25519_multikey_api::{Ed25519Provider, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::jwk::{self, JsonWebKey2020};
use crate::key2018::{self, VerificationKey2018};
use crate::keypair::{Ed25519KeyPair, KeyPairOptions};

/// Canonical serialized form of an [`Ed25519KeyPair`]
///
/// Optional fields are omitted from the JSON output when unset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportedKeyPair {
    /// JSON-LD context, present when requested at export time
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none", default)]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// Suite identifier, `Ed25519VerificationKey2020`
    #[serde(rename = "type")]
    pub key_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub controller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub public_key_multibase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub private_key_multibase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revoked: Option<String>,
}

/// Tagged union over the three serialized key-pair formats
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializedKeyPair {
    /// Canonical multibase record (`Ed25519VerificationKey2020`, and any
    /// record without a recognized `type`)
    Multikey(ExportedKeyPair),
    /// Legacy base58 record (`Ed25519VerificationKey2018`)
    Key2018(VerificationKey2018),
    /// JWK wrapper record (`JsonWebKey2020`)
    Jwk2020(JsonWebKey2020),
}

fn deserialization_error(error: serde_json::Error) -> Error {
    Error::Serialization {
        context: "keyPair",
        message: error.to_string(),
    }
}

impl SerializedKeyPair {
    /// Parse a serialized key pair from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(deserialization_error)?;
        Self::from_value(value)
    }

    /// Classify a JSON value by its `type` tag
    ///
    /// Records without a recognized tag fall through to the canonical
    /// variant, which then enforces its own field requirements.
    pub fn from_value(value: Value) -> Result<Self> {
        match value.get("type").and_then(Value::as_str) {
            Some(key2018::SUITE_ID_2018) => serde_json::from_value(value)
                .map(Self::Key2018)
                .map_err(deserialization_error),
            Some(jwk::JWK_SUITE_ID) => serde_json::from_value(value)
                .map(Self::Jwk2020)
                .map_err(deserialization_error),
            _ => serde_json::from_value(value)
                .map(Self::Multikey)
                .map_err(deserialization_error),
        }
    }
}

impl From<ExportedKeyPair> for SerializedKeyPair {
    fn from(record: ExportedKeyPair) -> Self {
        Self::Multikey(record)
    }
}

impl From<VerificationKey2018> for SerializedKeyPair {
    fn from(record: VerificationKey2018) -> Self {
        Self::Key2018(record)
    }
}

impl From<JsonWebKey2020> for SerializedKeyPair {
    fn from(record: JsonWebKey2020) -> Self {
        Self::Jwk2020(record)
    }
}

impl<P: Ed25519Provider> Ed25519KeyPair<P> {
    /// Construct a key pair from any serialized record
    pub fn from_serialized(serialized: &SerializedKeyPair) -> Result<Self> {
        match serialized {
            SerializedKeyPair::Multikey(record) => Self::new(KeyPairOptions {
                id: record.id.clone(),
                controller: record.controller.clone(),
                revoked: record.revoked.clone(),
                public_key_multibase: record.public_key_multibase.clone(),
                private_key_multibase: record.private_key_multibase.clone(),
            }),
            SerializedKeyPair::Key2018(record) => {
                Self::from_ed25519_verification_key_2018(record)
            }
            SerializedKeyPair::Jwk2020(record) => Self::from_json_web_key_2020(record),
        }
    }

    /// Construct a key pair from a JSON record of any supported format
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_serialized(&SerializedKeyPair::from_json(json)?)
    }
}
