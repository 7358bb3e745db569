//! P-256 public points and their X9.63 / SEC1 uncompressed encoding

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::PublicKey;

use super::constants::{
    P256_POINT_UNCOMPRESSED_SIZE, SEC1_TAG_IDENTITY, SEC1_TAG_UNCOMPRESSED,
};
use crate::error::{Error, Result};

const CONTEXT: &str = "P-256 uncompressed point";

/// A validated point on P-256, never the identity
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point(PublicKey);

impl Point {
    pub(crate) fn from_public_key(key: PublicKey) -> Self {
        Point(key)
    }

    pub(crate) fn as_public_key(&self) -> &PublicKey {
        &self.0
    }

    /// Parse `0x04 || X || Y`
    ///
    /// Rejects a wrong length, any other tag (compressed, hybrid or the
    /// encoded identity), coordinates outside the field and points that do
    /// not satisfy the curve equation.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != P256_POINT_UNCOMPRESSED_SIZE {
            return Err(Error::point(
                CONTEXT,
                format!(
                    "expected {} bytes, got {}",
                    P256_POINT_UNCOMPRESSED_SIZE,
                    bytes.len()
                ),
            ));
        }

        match bytes[0] {
            SEC1_TAG_UNCOMPRESSED => {}
            SEC1_TAG_IDENTITY => {
                return Err(Error::point(CONTEXT, "point at infinity is not a public key"))
            }
            tag => {
                return Err(Error::point(
                    CONTEXT,
                    format!("expected prefix 0x04, got {:#04x}", tag),
                ))
            }
        }

        PublicKey::from_sec1_bytes(bytes)
            .map(Point)
            .map_err(|_| Error::point(CONTEXT, "coordinates do not lie on the curve"))
    }

    /// Encode as `0x04 || X || Y`, 65 bytes, coordinates big-endian
    pub fn serialize_uncompressed(&self) -> [u8; P256_POINT_UNCOMPRESSED_SIZE] {
        let encoded = self.0.to_encoded_point(false);
        let mut out = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
        out.copy_from_slice(encoded.as_bytes());
        out
    }
}
