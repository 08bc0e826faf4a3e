//! Cross-format interoperability: legacy Ed25519VerificationKey2018 records,
//! JsonWebKey2020 records, and signature compatibility between the formats.

use ed25519_multikey_api::{Signer, Verifier};
use ed25519_multikey_suite::key2018::{SUITE_CONTEXT_2018, SUITE_ID_2018};
use ed25519_multikey_suite::{
    Ed25519KeyPair, ExportOptions, SerializedKeyPair, VerificationKey2018,
};
use ed25519_multikey_tests::{
    rfc8032_keypair, seed1_keypair, RFC8032_TEST_SIGNATURE_BASE58, SEED1_PRIVATE_BASE58,
    SEED1_PUBLIC_BASE58,
};

#[test]
fn exports_legacy_2018_record() {
    let key = seed1_keypair();
    let record = key
        .to_ed25519_verification_key_2018(ExportOptions {
            include_context: true,
            ..ExportOptions::full()
        })
        .unwrap();
    assert_eq!(record.key_type, SUITE_ID_2018);
    assert_eq!(record.context.as_deref(), Some(SUITE_CONTEXT_2018));
    assert_eq!(record.public_key_base58.as_deref(), Some(SEED1_PUBLIC_BASE58));
    assert_eq!(record.private_key_base58.as_deref(), Some(SEED1_PRIVATE_BASE58));
}

#[test]
fn legacy_2018_round_trip_is_lossless() {
    let key = seed1_keypair();
    let record = key.to_ed25519_verification_key_2018(ExportOptions::full()).unwrap();
    let imported: Ed25519KeyPair =
        Ed25519KeyPair::from_ed25519_verification_key_2018(&record).unwrap();
    assert_eq!(imported.public_key_multibase(), key.public_key_multibase());
    assert_eq!(imported.private_key_multibase(), key.private_key_multibase());
}

#[test]
fn legacy_2018_key_signs_identically() {
    let key = seed1_keypair();
    let record = key.to_ed25519_verification_key_2018(ExportOptions::full()).unwrap();
    let imported: Ed25519KeyPair =
        Ed25519KeyPair::from_ed25519_verification_key_2018(&record).unwrap();

    let message = b"interop test data";
    let signature = key.signer().sign(message).unwrap();
    assert_eq!(imported.signer().sign(message).unwrap(), signature);
    assert!(imported.verifier().verify(message, &signature).unwrap());
}

#[test]
fn serialized_dispatch_recognizes_2018_records() {
    let json = serde_json::to_string(&VerificationKey2018 {
        context: Some(SUITE_CONTEXT_2018.to_owned()),
        id: None,
        key_type: SUITE_ID_2018.to_owned(),
        controller: None,
        public_key_base58: Some(SEED1_PUBLIC_BASE58.to_owned()),
        private_key_base58: None,
        revoked: None,
    })
    .unwrap();
    let serialized = SerializedKeyPair::from_json(&json).unwrap();
    assert!(matches!(serialized, SerializedKeyPair::Key2018(_)));

    let imported: Ed25519KeyPair = Ed25519KeyPair::from_serialized(&serialized).unwrap();
    assert_eq!(
        imported.public_key_multibase(),
        seed1_keypair().public_key_multibase()
    );
}

#[test]
fn jwk_record_round_trip() {
    let key = rfc8032_keypair();
    let record = key.to_json_web_key_2020().unwrap();
    let json = serde_json::to_string(&record).unwrap();

    let serialized = SerializedKeyPair::from_json(&json).unwrap();
    assert!(matches!(serialized, SerializedKeyPair::Jwk2020(_)));

    let imported: Ed25519KeyPair = Ed25519KeyPair::from_serialized(&serialized).unwrap();
    assert_eq!(imported.public_key_multibase(), key.public_key_multibase());
    assert_eq!(imported.controller(), key.controller());
}

#[test]
fn jwk_imported_key_verifies_multikey_signatures() {
    let key = rfc8032_keypair();
    let record = key.to_json_web_key_2020().unwrap();
    let imported: Ed25519KeyPair = Ed25519KeyPair::from_json_web_key_2020(&record).unwrap();

    let signature = key.signer().sign(b"cross-format").unwrap();
    assert!(imported.verifier().verify(b"cross-format", &signature).unwrap());
}

#[test]
fn signature_matches_published_vector() {
    let key = rfc8032_keypair();
    let signature = key.signer().sign(b"test 1234").unwrap();
    assert_eq!(
        bs58::encode(&signature).into_string(),
        RFC8032_TEST_SIGNATURE_BASE58
    );
}

#[test]
fn tampered_data_does_not_verify() {
    let key = rfc8032_keypair();
    let signature = key.signer().sign(b"test 1234").unwrap();
    let verifier = key.verifier();
    assert!(verifier.verify(b"test 1234", &signature).unwrap());
    assert!(!verifier.verify(b"test 12345", &signature).unwrap());

    let mut mangled = signature.clone();
    mangled[0] ^= 0x01;
    assert!(!verifier.verify(b"test 1234", &mangled).unwrap());
}
