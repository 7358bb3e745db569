//! Elliptic Curve Primitives
//!
//! Thin, validated layer over the RustCrypto `p256` arithmetic: scalar
//! sampling, uncompressed SEC1 point encoding and cofactor Diffie-Hellman.

pub mod p256;

pub use self::p256::{Point as P256Point, Scalar as P256Scalar};
