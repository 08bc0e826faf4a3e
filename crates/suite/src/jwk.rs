//! Conversion to and from the JSON Web Key format (RFC 8037)
//!
//! An Ed25519 JWK carries the public key as base64url in `x` and, when the
//! key can sign, the 32-byte seed scalar as base64url in `d`. The canonical
//! 64-byte private buffer (`seed || public`) is split and rebuilt at this
//! boundary. Thumbprints follow RFC 7638 over the exact member set
//! `{"crv","kty","x"}` in that order.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use core::fmt;
use ed25519_multikey_api::{Ed25519Provider, Error, Result};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::keypair::{encode_multibase_key, Ed25519KeyPair, ExportOptions, KeyPairOptions};
use crate::multicodec::{ED25519_PRIV_HEADER, ED25519_PUB_HEADER};
use crate::validators::assert_key_bytes;

/// Suite identifier of the JWK wrapper format
pub const JWK_SUITE_ID: &str = "JsonWebKey2020";

/// JSON-LD context of the JWK wrapper format
pub const JWK_SUITE_CONTEXT: &str = "https://w3id.org/security/jws/v1";

const JWK_KTY: &str = "OKP";
const JWK_CRV: &str = "Ed25519";

/// A JSON Web Key for an Ed25519 key
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Jwk {
    /// Key type; always `OKP` for this suite
    pub kty: String,
    /// Curve name; always `Ed25519` for this suite
    pub crv: String,
    /// Public key bytes, base64url without padding
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x: Option<String>,
    /// Private seed scalar, base64url without padding
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub d: Option<String>,
}

impl fmt::Debug for Jwk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Jwk")
            .field("kty", &self.kty)
            .field("crv", &self.crv)
            .field("x", &self.x)
            .field("d", &self.d.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Serialized JsonWebKey2020 record wrapping a [`Jwk`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JsonWebKey2020 {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none", default)]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    /// Suite identifier, `JsonWebKey2020`
    #[serde(rename = "type")]
    pub key_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub controller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub public_key_jwk: Option<Jwk>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub private_key_jwk: Option<Jwk>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revoked: Option<String>,
}

/// Thumbprint input per RFC 7638: required members only, lexicographic
/// order, no whitespace. The field order of this struct is load-bearing.
#[derive(Serialize)]
struct ThumbprintJwk<'a> {
    crv: &'a str,
    kty: &'a str,
    x: &'a str,
}

fn decode_base64url(field: &'static str, text: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|e| Error::format(field, e.to_string()))
}

impl<P: Ed25519Provider> Ed25519KeyPair<P> {
    /// Import a key pair from a bare JWK
    ///
    /// A `d` member rebuilds the 64-byte private convention as
    /// `seed || public key`; `options` carries the identity fields.
    pub fn from_jwk(jwk: &Jwk, mut options: KeyPairOptions) -> Result<Self> {
        if jwk.kty != JWK_KTY {
            return Err(Error::validation("kty", "\"kty\" is required to be \"OKP\""));
        }
        if jwk.crv != JWK_CRV {
            return Err(Error::validation(
                "crv",
                "\"crv\" is required to be \"Ed25519\"",
            ));
        }
        let x = jwk
            .x
            .as_deref()
            .ok_or_else(|| Error::validation("x", "property is required"))?;
        let public_key_bytes = decode_base64url("x", x)?;
        assert_key_bytes(&public_key_bytes, 32, "invalidPublicKeyLength")?;
        options.public_key_multibase =
            Some(encode_multibase_key(&ED25519_PUB_HEADER, &public_key_bytes));

        options.private_key_multibase = match jwk.d.as_deref() {
            None => None,
            Some(d) => {
                let seed = Zeroizing::new(decode_base64url("d", d)?);
                assert_key_bytes(&seed, 32, "invalidSeedLength")?;
                let mut private_key_bytes = Zeroizing::new(Vec::with_capacity(64));
                private_key_bytes.extend_from_slice(&seed);
                private_key_bytes.extend_from_slice(&public_key_bytes);
                Some(encode_multibase_key(&ED25519_PRIV_HEADER, &private_key_bytes))
            }
        };

        Self::new(options)
    }

    /// Import a key pair from a JsonWebKey2020 record
    pub fn from_json_web_key_2020(record: &JsonWebKey2020) -> Result<Self> {
        if record.key_type != JWK_SUITE_ID {
            return Err(Error::validation(
                "type",
                format!("Invalid key type: \"{}\"", record.key_type),
            ));
        }
        let public_key_jwk = record
            .public_key_jwk
            .as_ref()
            .ok_or_else(|| Error::validation("publicKeyJwk", "property is required"))?;

        // private material rides on the privateKeyJwk record's d member
        let mut jwk = public_key_jwk.clone();
        jwk.d = record
            .private_key_jwk
            .as_ref()
            .and_then(|private| private.d.clone());

        Self::from_jwk(
            &jwk,
            KeyPairOptions {
                id: record.id.clone(),
                controller: record.controller.clone(),
                revoked: record.revoked.clone(),
                ..Default::default()
            },
        )
    }

    /// Export this key pair as a bare JWK
    pub fn to_jwk(&self, options: ExportOptions) -> Result<Jwk> {
        if !(options.public_key || options.private_key) {
            return Err(Error::validation(
                "export",
                "Either a \"publicKey\" or a \"privateKey\" is required",
            ));
        }
        let public_key_bytes = self.public_key_bytes()?;

        let mut jwk = Jwk {
            kty: JWK_KTY.to_owned(),
            crv: JWK_CRV.to_owned(),
            x: None,
            d: None,
        };
        if options.public_key {
            jwk.x = Some(URL_SAFE_NO_PAD.encode(&public_key_bytes));
        }
        if options.private_key {
            if let Some(private_key_bytes) = self.private_key_bytes()? {
                // the private buffer is seed || public; the JWK wants the
                // seed half only
                let seed_len = private_key_bytes.len() - public_key_bytes.len();
                jwk.d = Some(URL_SAFE_NO_PAD.encode(&private_key_bytes[..seed_len]));
            }
        }
        Ok(jwk)
    }

    /// RFC 7638 thumbprint of this key's public JWK
    pub fn jwk_thumbprint(&self) -> Result<String> {
        let x = URL_SAFE_NO_PAD.encode(self.public_key_bytes()?);
        let serialized = serde_json::to_string(&ThumbprintJwk {
            crv: JWK_CRV,
            kty: JWK_KTY,
            x: &x,
        })
        .map_err(|e| Error::Serialization {
            context: "jwkThumbprint",
            message: e.to_string(),
        })?;
        Ok(URL_SAFE_NO_PAD.encode(P::sha256(serialized.as_bytes())))
    }

    /// Export this key pair as a JsonWebKey2020 record (public key only)
    ///
    /// When a controller is set, the record id is
    /// `<controller>#<jwk thumbprint>`.
    pub fn to_json_web_key_2020(&self) -> Result<JsonWebKey2020> {
        let mut record = JsonWebKey2020 {
            context: Some(JWK_SUITE_CONTEXT.to_owned()),
            id: None,
            key_type: JWK_SUITE_ID.to_owned(),
            controller: None,
            public_key_jwk: Some(self.to_jwk(ExportOptions::public())?),
            private_key_jwk: None,
            revoked: None,
        };
        if let Some(controller) = self.controller() {
            record.controller = Some(controller.to_owned());
            record.id = Some(format!("{controller}#{}", self.jwk_thumbprint()?));
        }
        Ok(record)
    }
}
