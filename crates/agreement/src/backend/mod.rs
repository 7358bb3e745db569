//! Backends that hold the private half of a key agreement key pair
//!
//! The service only talks to [`AgreementBackend`] and [`PrivateKeyHandle`],
//! so the same code drives a scalar in process memory and a key that lives
//! inside a secure element.

use core::fmt;

use keyx_algorithms::ec::p256::{Point, P256_SHARED_SECRET_SIZE};
use keyx_common::SecretBuffer;

use crate::error::Result;

mod hardware;
mod software;

pub use hardware::{HardwareBackend, HardwareKey};
pub use software::{SoftwareBackend, SoftwareKey};

/// Where a private scalar lives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyBacking {
    /// Ordinary process memory
    Software,
    /// A secure element; the scalar is never visible to the process
    Hardware,
}

impl fmt::Display for KeyBacking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyBacking::Software => write!(f, "software"),
            KeyBacking::Hardware => write!(f, "hardware"),
        }
    }
}

/// Owned reference to one private key
///
/// Dropping the handle releases the key.
pub trait PrivateKeyHandle: Send + Sync {
    /// Where the scalar lives
    fn backing(&self) -> KeyBacking;

    /// The public point matching this private key
    fn public_key(&self) -> &Point;

    /// Cofactor ECDH with an already validated peer point
    ///
    /// Returns the raw X coordinate of the shared point.
    fn agree(&self, peer: &Point) -> Result<SecretBuffer<P256_SHARED_SECRET_SIZE>>;
}

/// Factory for private keys
pub trait AgreementBackend: Send + Sync {
    /// Short identifier used in errors and logs
    fn name(&self) -> &'static str;

    /// Where keys from this backend live
    fn backing(&self) -> KeyBacking;

    /// Create a fresh P-256 private key
    fn generate(&self) -> Result<Box<dyn PrivateKeyHandle>>;
}
