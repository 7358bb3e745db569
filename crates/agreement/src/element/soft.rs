//! In-process secure element
//!
//! Keeps scalars in a slot table behind a mutex and enforces the same access
//! policies a device would. Scalars are reachable only through the
//! [`SecureElement`] calls, so code written against this element works
//! unchanged against a hardware one.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use keyx_algorithms::ec::p256::{
    self as ec_p256, Point, Scalar, P256_POINT_UNCOMPRESSED_SIZE, P256_SHARED_SECRET_SIZE,
};
use keyx_common::SecretBuffer;
use rand::rngs::OsRng;
use tracing::debug;

use super::{AccessPolicy, ElementError, ElementResult, KeyAttributes, KeySlot, SecureElement};

/// Default number of key slots
pub const DEFAULT_SLOT_CAPACITY: usize = 64;

struct StoredKey {
    scalar: Scalar,
    access: AccessPolicy,
}

struct ElementState {
    slots: HashMap<KeySlot, StoredKey>,
    next_slot: u64,
    available: bool,
    passcode_set: bool,
    unlocked: bool,
}

impl ElementState {
    fn check_available(&self) -> ElementResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(ElementError::Unavailable)
        }
    }

    fn check_access(&self, access: AccessPolicy) -> ElementResult<()> {
        let allowed = match access {
            AccessPolicy::Always => true,
            AccessPolicy::WhenUnlocked => self.unlocked,
            AccessPolicy::WhenPasscodeSetThisDeviceOnly => self.unlocked && self.passcode_set,
        };
        if allowed {
            Ok(())
        } else {
            Err(ElementError::AccessDenied(access))
        }
    }

    fn key(&self, slot: KeySlot) -> ElementResult<&StoredKey> {
        self.slots.get(&slot).ok_or(ElementError::UnknownSlot(slot))
    }
}

/// Software secure element
///
/// Starts available, unlocked and with a passcode set.
pub struct SoftElement {
    state: Mutex<ElementState>,
    capacity: usize,
}

impl Default for SoftElement {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftElement {
    /// Create an element with [`DEFAULT_SLOT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SLOT_CAPACITY)
    }

    /// Create an element holding at most `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(ElementState {
                slots: HashMap::new(),
                next_slot: 1,
                available: true,
                passcode_set: true,
                unlocked: true,
            }),
            capacity,
        }
    }

    /// Simulate the element going away or coming back
    pub fn set_available(&self, available: bool) {
        self.lock().available = available;
    }

    /// Simulate the device passcode being set or removed
    pub fn set_passcode(&self, passcode_set: bool) {
        self.lock().passcode_set = passcode_set;
    }

    /// Simulate the device being locked or unlocked
    pub fn set_unlocked(&self, unlocked: bool) {
        self.lock().unlocked = unlocked;
    }

    /// Number of keys currently held
    pub fn key_count(&self) -> usize {
        self.lock().slots.len()
    }

    // Critical sections are single slot or flag updates; a poisoned table is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, ElementState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SecureElement for SoftElement {
    fn name(&self) -> &'static str {
        "soft-element"
    }

    fn create_key(&self, attributes: &KeyAttributes) -> ElementResult<KeySlot> {
        let mut state = self.lock();
        state.check_available()?;
        state.check_access(attributes.access)?;
        if state.slots.len() >= self.capacity {
            return Err(ElementError::CapacityExhausted(self.capacity));
        }

        let scalar = Scalar::random(&mut OsRng).map_err(|e| ElementError::Rejected(e.to_string()))?;

        let slot = KeySlot::new(state.next_slot);
        state.next_slot += 1;
        state.slots.insert(
            slot,
            StoredKey {
                scalar,
                access: attributes.access,
            },
        );

        debug!(slot = slot.id(), permanent = attributes.permanent, "created key");
        Ok(slot)
    }

    fn public_key(&self, slot: KeySlot) -> ElementResult<[u8; P256_POINT_UNCOMPRESSED_SIZE]> {
        let state = self.lock();
        state.check_available()?;
        Ok(state.key(slot)?.scalar.public_point().serialize_uncompressed())
    }

    fn key_exchange(
        &self,
        slot: KeySlot,
        peer: &[u8; P256_POINT_UNCOMPRESSED_SIZE],
    ) -> ElementResult<SecretBuffer<P256_SHARED_SECRET_SIZE>> {
        let state = self.lock();
        state.check_available()?;
        let key = state.key(slot)?;
        state.check_access(key.access)?;

        let peer = Point::deserialize_uncompressed(peer)
            .map_err(|e| ElementError::Rejected(e.to_string()))?;
        ec_p256::cofactor_ecdh(&key.scalar, &peer).map_err(|e| ElementError::Rejected(e.to_string()))
    }

    fn delete_key(&self, slot: KeySlot) -> ElementResult<()> {
        let mut state = self.lock();
        state
            .slots
            .remove(&slot)
            .map(|_| debug!(slot = slot.id(), "deleted key"))
            .ok_or(ElementError::UnknownSlot(slot))
    }
}
