//! End-to-end key agreement across backends

use std::sync::Arc;
use std::thread;

use keyx_agreement::{
    AccessPolicy, AgreementConfig, HardwareBackend, KeyAgreementService, KeyAttributes,
    KeyBacking, SoftElement,
};
use keyx_api::{Error, KeyAgreement, Serialize};
use keyx_tests::seeded_service;

#[test]
fn test_scenario_generate_export_agree() {
    let service = KeyAgreementService::software();
    let a = service.generate().unwrap();
    let b = service.generate().unwrap();

    let a_pub = service.export_public_key(&a).to_bytes();
    let b_pub = service.export_public_key(&b).to_bytes();
    for encoded in [&a_pub, &b_pub] {
        assert_eq!(encoded.len(), 65);
        assert_eq!(encoded[0], 0x04);
    }

    let ab = service.compute_shared_secret(&a, &b_pub).unwrap();
    let ba = service.compute_shared_secret(&b, &a_pub).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.len(), 32);
}

#[test]
fn test_old_and_new_backends_agree() {
    let element = Arc::new(SoftElement::new());
    let old = KeyAgreementService::software();
    let new = KeyAgreementService::hardware(element.clone());

    let old_kp = old.generate().unwrap();
    let new_kp = new.generate().unwrap();
    assert_eq!(old_kp.backing(), KeyBacking::Software);
    assert_eq!(new_kp.backing(), KeyBacking::Hardware);
    assert_eq!(element.key_count(), 1);

    let k_old = old
        .compute_shared_secret(&old_kp, new_kp.public_key().as_ref())
        .unwrap();
    let k_new = new
        .compute_shared_secret(&new_kp, old_kp.public_key().as_ref())
        .unwrap();
    assert_eq!(k_old.to_hex(), k_new.to_hex());
    assert_eq!(k_old.to_hex().len(), 64);
    assert_eq!(new_kp.public_key_hex().len(), 130);

    drop(new_kp);
    assert_eq!(element.key_count(), 0);
}

#[test]
fn test_matching_configs_agree_and_mismatched_do_not() {
    let config = AgreementConfig::default()
        .with_shared_info(b"session-7".to_vec())
        .with_output_len(64);

    let alice = KeyAgreementService::software().with_config(config.clone()).unwrap();
    let bob = KeyAgreementService::hardware(Arc::new(SoftElement::new()))
        .with_config(config)
        .unwrap();
    let plain = KeyAgreementService::software();

    let a = alice.generate().unwrap();
    let b = bob.generate().unwrap();

    let ab = alice.compute_shared_secret(&a, b.public_key().as_ref()).unwrap();
    let ba = bob.compute_shared_secret(&b, a.public_key().as_ref()).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.len(), 64);

    // Same keys, default derivation: a different key, and the 32-byte prefix
    // differs too because shared info feeds every block.
    let plain_ab = plain.compute_shared_secret(&a, b.public_key().as_ref()).unwrap();
    assert_eq!(plain_ab.len(), 32);
    assert_ne!(&ab.as_slice()[..32], plain_ab.as_slice());
}

#[test]
fn test_output_len_prefix_property() {
    let short = seeded_service(3);
    let long = seeded_service(3)
        .with_config(AgreementConfig::default().with_output_len(96))
        .unwrap();

    let a = short.generate().unwrap();
    let b = long.generate().unwrap();
    assert_eq!(a.public_key(), b.public_key());

    let peer = seeded_service(4).generate().unwrap();
    let k32 = short.compute_shared_secret(&a, peer.public_key().as_ref()).unwrap();
    let k96 = long.compute_shared_secret(&b, peer.public_key().as_ref()).unwrap();
    assert_eq!(&k96.as_slice()[..32], k32.as_slice());
}

#[test]
fn test_hardware_policy_failures_are_keygen_errors() {
    let element = Arc::new(SoftElement::new());
    element.set_unlocked(false);

    let default_policy = KeyAgreementService::hardware(element.clone());
    assert!(matches!(
        default_policy.generate(),
        Err(Error::KeyGeneration { .. })
    ));

    let always = KeyAgreementService::with_backend(Box::new(HardwareBackend::with_attributes(
        element.clone(),
        KeyAttributes {
            permanent: false,
            access: AccessPolicy::Always,
        },
    )));
    assert!(always.generate().is_ok());
}

#[test]
fn test_capacity_exhaustion_reported() {
    let element = Arc::new(SoftElement::with_capacity(2));
    let service = KeyAgreementService::hardware(element);

    let _a = service.generate().unwrap();
    let _b = service.generate().unwrap();
    let err = service.generate().unwrap_err();
    assert!(matches!(err, Error::KeyGeneration { .. }), "{:?}", err);
    assert!(!err.is_recoverable());
}

#[test]
fn test_independent_services_on_threads() {
    let element = Arc::new(SoftElement::new());
    let peer_service = KeyAgreementService::software();
    let peer = Arc::new(peer_service.generate().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let element = element.clone();
            let peer = peer.clone();
            thread::spawn(move || {
                let service = if i % 2 == 0 {
                    KeyAgreementService::software()
                } else {
                    KeyAgreementService::hardware(element)
                };
                let kp = service.generate().unwrap();
                let key = service
                    .compute_shared_secret(&kp, peer.public_key().as_ref())
                    .unwrap();
                (*kp.public_key().as_bytes(), key.to_hex())
            })
        })
        .collect();

    for handle in handles {
        let (public, key_hex) = handle.join().unwrap();
        let expected = peer_service.compute_shared_secret(&peer, &public).unwrap();
        assert_eq!(expected.to_hex(), key_hex);
    }
}

#[test]
fn test_generic_over_key_agreement_trait() {
    fn exchange<K: KeyAgreement>(left: &K, right: &K) -> bool
    where
        K::DerivedKey: PartialEq,
    {
        let a = left.generate().unwrap();
        let b = right.generate().unwrap();
        let a_pub = left.export_public_key(&a).to_bytes();
        let b_pub = right.export_public_key(&b).to_bytes();
        left.compute_shared_secret(&a, &b_pub).unwrap()
            == right.compute_shared_secret(&b, &a_pub).unwrap()
    }

    let software = KeyAgreementService::software();
    let hardware = KeyAgreementService::hardware(Arc::new(SoftElement::new()));
    assert!(exchange(&software, &hardware));
    assert_eq!(software.name(), keyx_agreement::ALGORITHM_NAME);
}
