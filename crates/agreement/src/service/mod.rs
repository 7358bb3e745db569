//! P-256 key agreement with X9.63 SHA-256 key derivation
//!
//! [`KeyAgreementService`] ties a backend to the derivation settings:
//!
//! 1. `generate` asks the backend for a private key and records its public
//!    point in uncompressed X9.63 form (`0x04 || X || Y`, 65 bytes).
//! 2. `compute_shared_secret` parses the peer's encoded point, runs cofactor
//!    ECDH through the key's backend and feeds the X coordinate to the
//!    X9.63 KDF. The raw shared secret is wiped when derivation returns.
//!
//! Both directions of an exchange produce the same derived key regardless of
//! which backend holds each private key.

use core::fmt;
use std::sync::Arc;

use keyx_algorithms::ec::p256::{self as ec_p256, Point, P256_POINT_UNCOMPRESSED_SIZE};
use keyx_algorithms::error::to_core_result;
use keyx_api::error::Error as CoreError;
use keyx_api::{KeyAgreement, Serialize, SerializeSecret};
use keyx_common::SecretVec;
use keyx_internal::constant_time::ct_eq;
use tracing::{debug, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::backend::{
    AgreementBackend, HardwareBackend, KeyBacking, PrivateKeyHandle, SoftwareBackend,
};
use crate::config::AgreementConfig;
use crate::element::SecureElement;
use crate::error::{Error, ResultExt};

/// Algorithm identifier reported by [`KeyAgreement::name`]
pub const ALGORITHM_NAME: &str = "ECDH-P256-X963-SHA256";

/// Public key encoded as an uncompressed X9.63 point
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct X963PublicKey([u8; P256_POINT_UNCOMPRESSED_SIZE]);

impl X963PublicKey {
    fn from_point(point: &Point) -> Self {
        X963PublicKey(point.serialize_uncompressed())
    }

    /// The 65 encoded bytes
    pub fn as_bytes(&self) -> &[u8; P256_POINT_UNCOMPRESSED_SIZE] {
        &self.0
    }

    /// Lowercase hex of the encoded bytes
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Serialize for X963PublicKey {
    fn from_bytes(bytes: &[u8]) -> keyx_api::Result<Self> {
        let point = Point::deserialize_uncompressed(bytes)
            .map_err(Error::from)
            .with_context("X9.63 public key")?;
        Ok(Self::from_point(&point))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for X963PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for X963PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X963PublicKey({})", self.to_hex())
    }
}

/// Symmetric key produced by the X9.63 KDF, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey(SecretVec);

impl DerivedKey {
    /// The derived bytes
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty key, which the service never produces
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex of the derived bytes, for display
    pub fn to_hex(&self) -> String {
        hex::encode(self.0.as_slice())
    }
}

impl SerializeSecret for DerivedKey {
    fn from_bytes(bytes: &[u8]) -> keyx_api::Result<Self> {
        if bytes.is_empty() {
            return Err(CoreError::InvalidLength {
                context: "derived key",
                expected: AgreementConfig::default().output_len,
                actual: 0,
            });
        }
        Ok(DerivedKey(SecretVec::from_slice(bytes)))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.as_slice(), other.as_slice())
    }
}

impl Eq for DerivedKey {}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey(len={}, [REDACTED])", self.len())
    }
}

/// A private key handle together with its encoded public key
pub struct KeyPair {
    handle: Box<dyn PrivateKeyHandle>,
    public: X963PublicKey,
}

impl KeyPair {
    /// Encoded public key
    pub fn public_key(&self) -> &X963PublicKey {
        &self.public
    }

    /// Lowercase hex of the encoded public key
    pub fn public_key_hex(&self) -> String {
        self.public.to_hex()
    }

    /// Where the private scalar lives
    pub fn backing(&self) -> KeyBacking {
        self.handle.backing()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("backing", &self.handle.backing())
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// Generates P-256 key pairs and derives shared keys from peer public keys
pub struct KeyAgreementService {
    backend: Box<dyn AgreementBackend>,
    config: AgreementConfig,
}

impl KeyAgreementService {
    /// Service whose scalars live in process memory, seeded from the OS RNG
    pub fn software() -> Self {
        Self::with_backend(Box::new(SoftwareBackend::new()))
    }

    /// Service whose scalars live in `element`
    pub fn hardware(element: Arc<dyn SecureElement>) -> Self {
        Self::with_backend(Box::new(HardwareBackend::new(element)))
    }

    /// Service over an arbitrary backend with default derivation settings
    pub fn with_backend(backend: Box<dyn AgreementBackend>) -> Self {
        Self {
            backend,
            config: AgreementConfig::default(),
        }
    }

    /// Replace the derivation settings after validating them
    pub fn with_config(mut self, config: AgreementConfig) -> keyx_api::Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Active derivation settings
    pub fn config(&self) -> &AgreementConfig {
        &self.config
    }

    /// Where keys from this service live
    pub fn backing(&self) -> KeyBacking {
        self.backend.backing()
    }

    /// Create a fresh key pair
    ///
    /// Backend failures are returned as `KeyGeneration` and never retried.
    pub fn generate(&self) -> keyx_api::Result<KeyPair> {
        let handle = self.backend.generate().map_err(|e| {
            warn!(backend = self.backend.name(), error = %e, "key generation refused");
            e
        })?;
        let public = X963PublicKey::from_point(handle.public_key());

        debug!(
            backend = self.backend.name(),
            backing = %handle.backing(),
            public_key = %public.to_hex(),
            "generated key pair"
        );
        Ok(KeyPair { handle, public })
    }

    /// Uncompressed X9.63 encoding of the key pair's public point
    pub fn export_public_key(&self, keypair: &KeyPair) -> X963PublicKey {
        keypair.public
    }

    /// Derive a key from `keypair` and the peer's encoded public point
    ///
    /// Fails with `InvalidPeerKey` for anything that is not a 65-byte
    /// uncompressed point on P-256, and with `KeyAgreement` when the backend
    /// cannot complete the exchange.
    pub fn compute_shared_secret(
        &self,
        keypair: &KeyPair,
        peer_public_key: &[u8],
    ) -> keyx_api::Result<DerivedKey> {
        let peer = Point::deserialize_uncompressed(peer_public_key).map_err(|e| {
            warn!(error = %e, "rejected peer public key");
            Error::from(e)
        })?;

        let shared = keypair.handle.agree(&peer).map_err(|e| {
            warn!(backing = %keypair.handle.backing(), error = %e, "key agreement refused");
            e
        })?;

        let derived = to_core_result(
            ec_p256::kdf_x963_sha256_for_ecdh(
                &shared,
                &self.config.shared_info,
                self.config.output_len,
            ),
            "X9.63 key derivation",
        )?;

        debug!(
            backing = %keypair.handle.backing(),
            output_len = derived.len(),
            "derived shared key"
        );
        Ok(DerivedKey(derived))
    }
}

impl fmt::Debug for KeyAgreementService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyAgreementService")
            .field("backend", &self.backend.name())
            .field("backing", &self.backend.backing())
            .field("config", &self.config)
            .finish()
    }
}

impl KeyAgreement for KeyAgreementService {
    type PublicKey = X963PublicKey;
    type KeyPair = KeyPair;
    type DerivedKey = DerivedKey;

    fn name(&self) -> &'static str {
        ALGORITHM_NAME
    }

    fn generate(&self) -> keyx_api::Result<KeyPair> {
        KeyAgreementService::generate(self)
    }

    fn export_public_key(&self, keypair: &KeyPair) -> X963PublicKey {
        KeyAgreementService::export_public_key(self, keypair)
    }

    fn compute_shared_secret(
        &self,
        keypair: &KeyPair,
        peer_public_key: &[u8],
    ) -> keyx_api::Result<DerivedKey> {
        KeyAgreementService::compute_shared_secret(self, keypair, peer_public_key)
    }
}
