//! Known-answer tests driven by the TOML vector files

use keyx_algorithms::ec::p256::{cofactor_ecdh, kdf_x963_sha256_for_ecdh, Point, Scalar};
use keyx_algorithms::kdf::{KeyDerivationFunction, X963Kdf};
use keyx_api::Error;
use keyx_tests::vectors::{decode, ecdh_vectors, invalid_peer_vectors, x963_kdf_vectors};
use keyx_tests::seeded_service;
use sha2::Sha256;

#[test]
fn test_x963_kdf_sha256_vectors() {
    let vectors = x963_kdf_vectors().unwrap();
    assert!(!vectors.is_empty());

    let kdf = X963Kdf::<Sha256>::new();
    for v in vectors {
        let z = decode("z", &v.z).unwrap();
        let info = decode("shared_info", &v.shared_info).unwrap();
        let key = kdf.derive_key(&z, &info, v.output_len).unwrap();
        assert_eq!(hex::encode(key.as_slice()), v.output, "vector {}", v.name);
    }
}

#[test]
fn test_ecdh_p256_vectors_both_directions() {
    for v in ecdh_vectors().unwrap() {
        let a = Scalar::deserialize(&decode("private_a", &v.private_a).unwrap()).unwrap();
        let b = Scalar::deserialize(&decode("private_b", &v.private_b).unwrap()).unwrap();

        assert_eq!(hex::encode(a.public_point().serialize_uncompressed()), v.public_a, "{}", v.name);
        assert_eq!(hex::encode(b.public_point().serialize_uncompressed()), v.public_b, "{}", v.name);

        let pub_a = Point::deserialize_uncompressed(&decode("public_a", &v.public_a).unwrap()).unwrap();
        let pub_b = Point::deserialize_uncompressed(&decode("public_b", &v.public_b).unwrap()).unwrap();

        let z_ab = cofactor_ecdh(&a, &pub_b).unwrap();
        let z_ba = cofactor_ecdh(&b, &pub_a).unwrap();
        assert_eq!(hex::encode(z_ab.as_slice()), v.shared_x, "{}", v.name);
        assert_eq!(z_ab, z_ba, "{}", v.name);

        let derived = kdf_x963_sha256_for_ecdh(&z_ab, &[], 32).unwrap();
        assert_eq!(hex::encode(derived.as_slice()), v.derived_32, "{}", v.name);
    }
}

#[test]
fn test_invalid_peer_vectors_rejected_by_service() {
    let service = seeded_service(1);
    let keypair = service.generate().unwrap();

    for v in invalid_peer_vectors().unwrap() {
        let bytes = decode("public", &v.public).unwrap();
        match service.compute_shared_secret(&keypair, &bytes) {
            Err(Error::InvalidPeerKey { .. }) => {}
            other => panic!("vector {} gave {:?}", v.name, other),
        }
    }
}
