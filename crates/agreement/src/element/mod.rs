//! Secure element capability interface
//!
//! A secure element holds P-256 private scalars that never leave it. Callers
//! refer to keys by [`KeySlot`] and ask the element to perform operations on
//! their behalf.

use keyx_algorithms::ec::p256::{P256_POINT_UNCOMPRESSED_SIZE, P256_SHARED_SECRET_SIZE};
use keyx_common::SecretBuffer;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod soft;

pub use soft::SoftElement;

/// Opaque reference to a key held by a secure element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeySlot(u64);

impl KeySlot {
    /// Wrap a raw slot number assigned by an element
    pub const fn new(id: u64) -> Self {
        KeySlot(id)
    }

    /// The raw slot number
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// When the element allows a private key to be used
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AccessPolicy {
    /// Usable at any time
    Always,
    /// Usable while the device is unlocked
    WhenUnlocked,
    /// Usable while unlocked, only if a device passcode is set; never migrates
    #[default]
    WhenPasscodeSetThisDeviceOnly,
}

/// Attributes requested when creating a key inside an element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyAttributes {
    /// Keep the key in the element after its handle is dropped
    pub permanent: bool,
    /// Access control applied to every use of the key
    pub access: AccessPolicy,
}

impl Default for KeyAttributes {
    fn default() -> Self {
        Self {
            permanent: false,
            access: AccessPolicy::WhenPasscodeSetThisDeviceOnly,
        }
    }
}

/// Failures reported by a secure element
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// The element is absent or not responding
    #[error("secure element unavailable")]
    Unavailable,

    /// The key's access policy is not satisfied by the device state
    #[error("access denied by policy {0:?}")]
    AccessDenied(AccessPolicy),

    /// No key lives in the given slot
    #[error("no key in slot {}", .0.id())]
    UnknownSlot(KeySlot),

    /// The element has no free key slots
    #[error("no free key slots (capacity {0})")]
    CapacityExhausted(usize),

    /// The element refused the request
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Result type for secure element calls
pub type ElementResult<T> = core::result::Result<T, ElementError>;

/// Operations a P-256 secure element exposes
///
/// Implementations must be safe to call from several threads; each call is a
/// blocking request that completes before returning.
pub trait SecureElement: Send + Sync {
    /// Short identifier used in errors and logs
    fn name(&self) -> &'static str;

    /// Create a fresh P-256 key-agreement key
    fn create_key(&self, attributes: &KeyAttributes) -> ElementResult<KeySlot>;

    /// Uncompressed public point of the key in `slot`
    fn public_key(&self, slot: KeySlot) -> ElementResult<[u8; P256_POINT_UNCOMPRESSED_SIZE]>;

    /// Cofactor ECDH between the key in `slot` and `peer`; returns the X coordinate
    fn key_exchange(
        &self,
        slot: KeySlot,
        peer: &[u8; P256_POINT_UNCOMPRESSED_SIZE],
    ) -> ElementResult<SecretBuffer<P256_SHARED_SECRET_SIZE>>;

    /// Destroy the key in `slot`
    fn delete_key(&self, slot: KeySlot) -> ElementResult<()>;
}
