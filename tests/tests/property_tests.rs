//! Property tests for agreement invariants

use keyx_agreement::{AgreementConfig, KeyAgreementService};
use keyx_api::Error;
use keyx_tests::seeded_service;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_agreement_is_commutative(seed_a in any::<u64>(), seed_b in any::<u64>()) {
        let a_service = seeded_service(seed_a);
        let b_service = seeded_service(seed_b);
        let a = a_service.generate().unwrap();
        let b = b_service.generate().unwrap();

        let ab = a_service.compute_shared_secret(&a, b.public_key().as_ref()).unwrap();
        let ba = b_service.compute_shared_secret(&b, a.public_key().as_ref()).unwrap();
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn prop_export_shape_and_determinism(seed in any::<u64>()) {
        let service = seeded_service(seed);
        let kp = service.generate().unwrap();
        let first = service.export_public_key(&kp);
        let second = service.export_public_key(&kp);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.as_bytes().len(), 65);
        prop_assert_eq!(first.as_bytes()[0], 0x04);
    }

    #[test]
    fn prop_output_len_honoured(len in 1usize..=AgreementConfig::MAX_OUTPUT_LEN, seed in any::<u64>()) {
        let service = seeded_service(seed)
            .with_config(AgreementConfig::default().with_output_len(len))
            .unwrap();
        let a = service.generate().unwrap();
        let b = service.generate().unwrap();
        let key = service.compute_shared_secret(&a, b.public_key().as_ref()).unwrap();
        prop_assert_eq!(key.len(), len);
    }

    #[test]
    fn prop_wrong_length_rejected(bytes in proptest::collection::vec(any::<u8>(), 0..130)) {
        prop_assume!(bytes.len() != 65);
        let service = seeded_service(0);
        let kp = service.generate().unwrap();
        let is_invalid_peer = matches!(
            service.compute_shared_secret(&kp, &bytes),
            Err(Error::InvalidPeerKey { .. })
        );
        prop_assert!(is_invalid_peer);
    }

    #[test]
    fn prop_random_coordinates_rejected(coords in proptest::collection::vec(any::<u8>(), 64)) {
        // A random (X, Y) pair lands on the curve with probability about 2^-256.
        let mut bytes = vec![0x04];
        bytes.extend_from_slice(&coords);

        let service = seeded_service(0);
        let kp = service.generate().unwrap();
        let is_invalid_peer = matches!(
            service.compute_shared_secret(&kp, &bytes),
            Err(Error::InvalidPeerKey { .. })
        );
        prop_assert!(is_invalid_peer);
    }

    #[test]
    fn prop_flipped_y_bit_rejected(seed in any::<u64>(), bit in 0usize..8) {
        let service = seeded_service(seed);
        let peer = service.generate().unwrap();
        let kp = service.generate().unwrap();

        let mut bytes = peer.public_key().as_bytes().to_vec();
        bytes[64] ^= 1 << bit;
        let is_invalid_peer = matches!(
            service.compute_shared_secret(&kp, &bytes),
            Err(Error::InvalidPeerKey { .. })
        );
        prop_assert!(is_invalid_peer);
    }
}

#[test]
fn test_distinct_seeds_give_distinct_keys() {
    let a = seeded_service(10).generate().unwrap();
    let b = seeded_service(11).generate().unwrap();
    assert_ne!(a.public_key(), b.public_key());
}

#[test]
fn test_software_service_generates_unique_keys() {
    let service = KeyAgreementService::software();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(*service.generate().unwrap().public_key().as_bytes()));
    }
}
