//! Shared constants for P-256 operations

pub use keyx_params::traditional::ecdh::{
    ECDH_P256_PRIVATE_KEY_SIZE as P256_SCALAR_SIZE,
    ECDH_P256_PUBLIC_KEY_SIZE as P256_POINT_UNCOMPRESSED_SIZE,
    ECDH_P256_SHARED_SECRET_SIZE as P256_SHARED_SECRET_SIZE, P256_COFACTOR,
    P256_FIELD_ELEMENT_SIZE, P256_KEYGEN_MAX_ATTEMPTS, SEC1_TAG_IDENTITY,
    SEC1_TAG_UNCOMPRESSED,
};
