//! Scalars held in process memory

use std::sync::Mutex;

use keyx_algorithms::ec::p256::{self as ec_p256, Point, Scalar, P256_SHARED_SECRET_SIZE};
use keyx_common::SecretBuffer;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::{AgreementBackend, KeyBacking, PrivateKeyHandle};
use crate::error::{Error, Result};

const NAME: &str = "software";

/// Backend that samples scalars from a CSPRNG
pub struct SoftwareBackend<R = OsRng> {
    rng: Mutex<R>,
}

impl SoftwareBackend<OsRng> {
    /// Backend drawing from the operating system RNG
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for SoftwareBackend<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CryptoRng + RngCore + Send> SoftwareBackend<R> {
    /// Backend drawing from `rng`
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: CryptoRng + RngCore + Send> AgreementBackend for SoftwareBackend<R> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn backing(&self) -> KeyBacking {
        KeyBacking::Software
    }

    fn generate(&self) -> Result<Box<dyn PrivateKeyHandle>> {
        let mut rng = self.rng.lock().map_err(|_| Error::KeyGeneration {
            backend: NAME,
            details: "random source poisoned".to_string(),
        })?;

        let (scalar, public) = ec_p256::generate_keypair(&mut *rng).map_err(|e| {
            Error::KeyGeneration {
                backend: NAME,
                details: e.to_string(),
            }
        })?;

        Ok(Box::new(SoftwareKey { scalar, public }))
    }
}

/// Private key held in process memory, wiped on drop
pub struct SoftwareKey {
    scalar: Scalar,
    public: Point,
}

impl PrivateKeyHandle for SoftwareKey {
    fn backing(&self) -> KeyBacking {
        KeyBacking::Software
    }

    fn public_key(&self) -> &Point {
        &self.public
    }

    fn agree(&self, peer: &Point) -> Result<SecretBuffer<P256_SHARED_SECRET_SIZE>> {
        ec_p256::cofactor_ecdh(&self.scalar, peer).map_err(|e| Error::Agreement {
            backend: NAME,
            details: e.to_string(),
        })
    }
}
