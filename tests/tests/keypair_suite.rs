//! End-to-end tests of the Ed25519VerificationKey2020 suite itself:
//! generation, multibase shape, fingerprints, export and re-import.

use ed25519_multikey_suite::{
    multibase, Ed25519KeyPair, ExportOptions, KeyPairOptions, SerializedKeyPair, SUITE_CONTEXT,
    SUITE_ID,
};
use ed25519_multikey_tests::{
    rfc8032_keypair, seed1_keypair, RFC8032_PUBLIC_MULTIBASE, SEED1_PRIVATE_MULTIBASE,
    SEED1_PUBLIC_MULTIBASE,
};
use rand::rngs::OsRng;

#[test]
fn generated_keys_have_multicodec_shape() {
    let key: Ed25519KeyPair =
        Ed25519KeyPair::generate(&mut OsRng, KeyPairOptions::default()).unwrap();

    let public = multibase::decode(key.public_key_multibase()).unwrap();
    assert_eq!(public.len(), 34, "2-byte header plus 32 key bytes");
    assert_eq!(&public[..2], &[0xed, 0x01]);

    let private = multibase::decode(key.private_key_multibase().unwrap()).unwrap();
    assert_eq!(private.len(), 66, "2-byte header plus 64 key bytes");
    assert_eq!(&private[..2], &[0x80, 0x26]);

    // last 32 bytes of the private key are the public key
    assert_eq!(&private[34..], &public[2..]);
}

#[test]
fn generation_is_randomized() {
    let a: Ed25519KeyPair =
        Ed25519KeyPair::generate(&mut OsRng, KeyPairOptions::default()).unwrap();
    let b: Ed25519KeyPair =
        Ed25519KeyPair::generate(&mut OsRng, KeyPairOptions::default()).unwrap();
    assert_ne!(a.public_key_multibase(), b.public_key_multibase());
}

#[test]
fn seeded_generation_is_deterministic() {
    let key = seed1_keypair();
    assert_eq!(key.public_key_multibase(), SEED1_PUBLIC_MULTIBASE);
    assert_eq!(
        key.private_key_multibase(),
        Some(SEED1_PRIVATE_MULTIBASE)
    );
    assert_eq!(
        seed1_keypair().public_key_multibase(),
        key.public_key_multibase()
    );
}

#[test]
fn fingerprint_is_the_public_key_multibase() {
    let key = rfc8032_keypair();
    assert_eq!(key.fingerprint(), RFC8032_PUBLIC_MULTIBASE);
    assert_eq!(
        key.id(),
        Some(format!("did:example:1234#{RFC8032_PUBLIC_MULTIBASE}").as_str())
    );
}

#[test]
fn fingerprint_verification() {
    let key = rfc8032_keypair();

    assert!(key.verify_fingerprint(key.fingerprint()).verified);

    let other = seed1_keypair();
    let mismatch = key.verify_fingerprint(other.fingerprint());
    assert!(!mismatch.verified);
    assert!(mismatch.error.is_some());

    // missing multibase marker
    let unmarked = key.verify_fingerprint(&key.fingerprint()[1..]);
    assert!(!unmarked.verified);

    // valid base58 that decodes to the wrong multicodec header
    let wrong_header = format!("z{}", bs58::encode([0x12u8, 0x00, 0x55]).into_string());
    assert!(!key.verify_fingerprint(&wrong_header).verified);
}

#[test]
fn round_trip_through_from_fingerprint() {
    let key = rfc8032_keypair();
    let public_only: Ed25519KeyPair = Ed25519KeyPair::from_fingerprint(key.fingerprint()).unwrap();
    assert_eq!(public_only.public_key_multibase(), key.public_key_multibase());
    assert!(public_only.private_key_multibase().is_none());
    assert!(public_only.verify_fingerprint(key.fingerprint()).verified);
}

#[test]
fn export_then_reimport_full_key() {
    let key = rfc8032_keypair();
    let exported = key
        .export(ExportOptions {
            include_context: true,
            ..ExportOptions::full()
        })
        .unwrap();
    assert_eq!(exported.key_type, SUITE_ID);
    assert_eq!(exported.context.as_deref(), Some(SUITE_CONTEXT));

    let json = serde_json::to_string(&exported).unwrap();
    let imported: Ed25519KeyPair = Ed25519KeyPair::from_json(&json).unwrap();
    assert_eq!(imported.id(), key.id());
    assert_eq!(imported.controller(), key.controller());
    assert_eq!(imported.public_key_multibase(), key.public_key_multibase());
    assert_eq!(imported.private_key_multibase(), key.private_key_multibase());
}

#[test]
fn public_export_omits_private_material() {
    let key = rfc8032_keypair();
    let json = serde_json::to_string(&key.export(ExportOptions::public()).unwrap()).unwrap();
    assert!(!json.contains("privateKeyMultibase"));

    let imported: Ed25519KeyPair = Ed25519KeyPair::from_json(&json).unwrap();
    assert!(imported.private_key_multibase().is_none());
}

#[test]
fn serialized_dispatch_recognizes_suite_records() {
    let key = rfc8032_keypair();
    let json = serde_json::to_string(&key.export(ExportOptions::public()).unwrap()).unwrap();
    assert!(matches!(
        SerializedKeyPair::from_json(&json).unwrap(),
        SerializedKeyPair::Multikey(_)
    ));
}

#[test]
fn revocation_is_carried_through_export() {
    let mut key = rfc8032_keypair();
    key.set_revoked("2026-08-30T00:00:00Z");
    let json = serde_json::to_string(&key.export(ExportOptions::public()).unwrap()).unwrap();
    let imported: Ed25519KeyPair = Ed25519KeyPair::from_json(&json).unwrap();
    assert_eq!(imported.revoked(), Some("2026-08-30T00:00:00Z"));
}
