//! Property tests over arbitrary seeds and messages.

use ed25519_multikey_api::{Signer, Verifier};
use ed25519_multikey_suite::{multibase, Ed25519KeyPair, KeyPairOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_seed_yields_well_formed_keys(seed in prop::array::uniform32(any::<u8>())) {
        let key: Ed25519KeyPair =
            Ed25519KeyPair::from_seed(&seed, KeyPairOptions::default()).unwrap();

        let public = multibase::decode(key.public_key_multibase()).unwrap();
        prop_assert_eq!(public.len(), 34);
        let private = multibase::decode(key.private_key_multibase().unwrap()).unwrap();
        prop_assert_eq!(private.len(), 66);

        prop_assert!(key.verify_fingerprint(key.fingerprint()).verified);
    }

    #[test]
    fn sign_verify_round_trip(
        seed in prop::array::uniform32(any::<u8>()),
        message in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let key: Ed25519KeyPair =
            Ed25519KeyPair::from_seed(&seed, KeyPairOptions::default()).unwrap();
        let signature = key.signer().sign(&message).unwrap();
        prop_assert!(key.verifier().verify(&message, &signature).unwrap());
    }
}
