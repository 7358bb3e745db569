//! P-256 private scalars

use core::fmt;

use keyx_common::SecretBuffer;
use p256::{FieldBytes, NonZeroScalar, SecretKey};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::constants::{P256_KEYGEN_MAX_ATTEMPTS, P256_SCALAR_SIZE};
use super::point::Point;
use crate::error::{validate, Error, Result};

/// P-256 private scalar in the range [1, n-1]
///
/// Backed by `p256::SecretKey`, which zeroizes itself on drop.
#[derive(Clone)]
pub struct Scalar(SecretKey);

impl Scalar {
    /// Create a scalar from big-endian bytes
    ///
    /// Fails when the value is zero or not below the group order. No modular
    /// reduction is applied, so every accepted input maps to a distinct key.
    pub fn new(bytes: &SecretBuffer<P256_SCALAR_SIZE>) -> Result<Self> {
        SecretKey::from_bytes(FieldBytes::from_slice(bytes.as_slice()))
            .map(Scalar)
            .map_err(|_| Error::param("scalar", "must be in the range [1, n-1]"))
    }

    /// Deserialize a scalar from a byte slice with length validation
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 scalar", bytes.len(), P256_SCALAR_SIZE)?;
        let mut buffer = SecretBuffer::<P256_SCALAR_SIZE>::zeroed();
        buffer.as_mut_slice().copy_from_slice(bytes);
        Self::new(&buffer)
    }

    /// Sample a uniformly random scalar by rejection sampling
    ///
    /// Random source failures are reported, never retried. Out-of-range
    /// candidates are redrawn up to `P256_KEYGEN_MAX_ATTEMPTS` times.
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let mut candidate = SecretBuffer::<P256_SCALAR_SIZE>::zeroed();

        for _ in 0..P256_KEYGEN_MAX_ATTEMPTS {
            rng.try_fill_bytes(candidate.as_mut_slice())
                .map_err(|e| Error::Random {
                    context: "P-256 scalar sampling",
                    details: e.to_string(),
                })?;

            if let Ok(scalar) = Self::new(&candidate) {
                candidate.zeroize();
                return Ok(scalar);
            }
        }

        Err(Error::Random {
            context: "P-256 scalar sampling",
            details: format!(
                "no valid scalar after {} attempts",
                P256_KEYGEN_MAX_ATTEMPTS
            ),
        })
    }

    /// The public point `d * G`
    pub fn public_point(&self) -> Point {
        Point::from_public_key(self.0.public_key())
    }

    pub(crate) fn to_nonzero_scalar(&self) -> NonZeroScalar {
        self.0.to_nonzero_scalar()
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P256Scalar([REDACTED])")
    }
}
