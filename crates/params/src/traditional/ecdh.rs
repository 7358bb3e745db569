//! Constants for Elliptic Curve Diffie-Hellman over NIST P-256

/// Size of a P-256 field element in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a P-256 private scalar in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of an uncompressed P-256 public key: 0x04 || X || Y
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 1 + 2 * P256_FIELD_ELEMENT_SIZE;

/// Size of the raw ECDH output (the X coordinate of the shared point)
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = P256_FIELD_ELEMENT_SIZE;

/// Cofactor of the P-256 group
pub const P256_COFACTOR: u64 = 1;

/// SEC1 / X9.62 tag of an uncompressed point
pub const SEC1_TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC1 tag of the encoded point at infinity
pub const SEC1_TAG_IDENTITY: u8 = 0x00;

/// Upper bound on scalar sampling attempts before key generation gives up.
///
/// A random 256-bit string is rejected with probability below 2^-32, so
/// reaching this bound means the random source is broken.
pub const P256_KEYGEN_MAX_ATTEMPTS: usize = 64;
