//! NIST P-256 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ - 3x + b over F_p with
//! p = 2^256 - 2^224 + 2^192 + 2^96 - 1 and cofactor h = 1.
//!
//! Field and group arithmetic come from the RustCrypto `p256` crate. This
//! module adds the parts key agreement needs on top: rejection-sampled key
//! generation, strict uncompressed point parsing, cofactor ECDH returning
//! the X coordinate, and X9.63 derivation over it.

mod constants;
mod point;
mod scalar;

pub use constants::{
    P256_COFACTOR, P256_FIELD_ELEMENT_SIZE, P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_SIZE,
    P256_SHARED_SECRET_SIZE,
};
pub use point::Point;
pub use scalar::Scalar;

use keyx_common::{SecretBuffer, SecretVec};
use p256::NonZeroScalar;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::kdf::{KeyDerivationFunction, X963Kdf};

/// Generate a key agreement keypair
///
/// Returns (private scalar, public point).
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let private_key = Scalar::random(rng)?;
    let public_key = private_key.public_point();
    Ok((private_key, public_key))
}

/// Cofactor Diffie-Hellman: the X coordinate of `[h * d] Q`
///
/// With h = 1 the multiplication by the cofactor does not change the scalar,
/// but the operation is the cofactor variant (SEC 1 §3.3.2) and is computed
/// as such. Returns `IdentityPoint` if the effective scalar is zero, which
/// would put the product at infinity.
///
/// The scalar copies are wiped before returning and the shared point only
/// lives inside a `p256::ecdh::SharedSecret`, which zeroizes on drop.
pub fn cofactor_ecdh(
    scalar: &Scalar,
    peer: &Point,
) -> Result<SecretBuffer<P256_SHARED_SECRET_SIZE>> {
    let mut d = scalar.to_nonzero_scalar();
    let mut k = *d * p256::Scalar::from(P256_COFACTOR);
    d.zeroize();

    let effective = Option::<NonZeroScalar>::from(NonZeroScalar::new(k));
    k.zeroize();
    let mut effective = effective.ok_or(Error::IdentityPoint {
        operation: "P-256 cofactor ECDH",
    })?;

    let shared = p256::ecdh::diffie_hellman(&effective, peer.as_public_key().as_affine());
    effective.zeroize();

    let x = shared.raw_secret_bytes();
    SecretBuffer::from_slice(x.as_slice()).ok_or(Error::Length {
        context: "P-256 shared secret",
        expected: P256_SHARED_SECRET_SIZE,
        actual: x.len(),
    })
}

/// X9.63 KDF with SHA-256 over a raw ECDH shared secret
pub fn kdf_x963_sha256_for_ecdh(
    shared_secret: &SecretBuffer<P256_SHARED_SECRET_SIZE>,
    shared_info: &[u8],
    output_len: usize,
) -> Result<SecretVec> {
    X963Kdf::<Sha256>::new().derive_key(shared_secret.as_slice(), shared_info, output_len)
}
