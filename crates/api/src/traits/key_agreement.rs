//! Trait definition for elliptic-curve key agreement

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use zeroize::Zeroize;

/// A key agreement scheme: generate a key pair, publish its public point and
/// derive a symmetric key from a peer's public point.
///
/// # Security Design
///
/// The private key never appears in this interface. Implementations keep it
/// inside `KeyPair`, which may itself only hold a handle to a hardware key.
pub trait KeyAgreement {
    /// Encoded public key.
    type PublicKey: Clone + Serialize;

    /// Owner of the private key and its public point.
    type KeyPair;

    /// Output of key derivation over the raw shared secret.
    ///
    /// # Security Note
    /// Zeroized on drop. The raw shared secret it is derived from never
    /// leaves the implementation.
    type DerivedKey: Zeroize + SerializeSecret;

    /// Returns the scheme name.
    fn name(&self) -> &'static str;

    /// Generate a new key pair.
    ///
    /// Failure means the environment cannot produce keys and must be reported,
    /// not retried silently.
    fn generate(&self) -> Result<Self::KeyPair>;

    /// Encode the public half of a key pair. Deterministic and total.
    fn export_public_key(&self, keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Derive a shared key from a local key pair and a peer's encoded public key.
    ///
    /// # Security Requirements
    /// - Must validate the peer key before use.
    /// - Must never return a default or placeholder key on failure.
    fn compute_shared_secret(
        &self,
        keypair: &Self::KeyPair,
        peer_public_key: &[u8],
    ) -> Result<Self::DerivedKey>;
}
