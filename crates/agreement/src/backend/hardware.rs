//! Keys delegated to a secure element

use std::sync::Arc;

use keyx_algorithms::ec::p256::{Point, P256_SHARED_SECRET_SIZE};
use keyx_common::SecretBuffer;
use tracing::warn;

use super::{AgreementBackend, KeyBacking, PrivateKeyHandle};
use crate::element::{KeyAttributes, KeySlot, SecureElement};
use crate::error::{Error, Result};

/// Backend whose scalars never leave a [`SecureElement`]
pub struct HardwareBackend {
    element: Arc<dyn SecureElement>,
    attributes: KeyAttributes,
}

impl HardwareBackend {
    /// Backend creating keys with default attributes
    pub fn new(element: Arc<dyn SecureElement>) -> Self {
        Self::with_attributes(element, KeyAttributes::default())
    }

    /// Backend creating keys with `attributes`
    pub fn with_attributes(element: Arc<dyn SecureElement>, attributes: KeyAttributes) -> Self {
        Self {
            element,
            attributes,
        }
    }

    /// Attributes requested for every new key
    pub fn attributes(&self) -> &KeyAttributes {
        &self.attributes
    }
}

impl AgreementBackend for HardwareBackend {
    fn name(&self) -> &'static str {
        self.element.name()
    }

    fn backing(&self) -> KeyBacking {
        KeyBacking::Hardware
    }

    fn generate(&self) -> Result<Box<dyn PrivateKeyHandle>> {
        let name = self.element.name();
        let slot = self
            .element
            .create_key(&self.attributes)
            .map_err(|e| Error::element_keygen(name, e))?;

        let public = self
            .element
            .public_key(slot)
            .map_err(|e| Error::element_keygen(name, e))
            .and_then(|encoded| {
                Point::deserialize_uncompressed(&encoded).map_err(|e| Error::KeyGeneration {
                    backend: name,
                    details: format!("element returned an invalid public key: {}", e),
                })
            });

        match public {
            Ok(public) => Ok(Box::new(HardwareKey {
                element: Arc::clone(&self.element),
                slot,
                permanent: self.attributes.permanent,
                public,
            })),
            Err(err) => {
                if let Err(e) = self.element.delete_key(slot) {
                    warn!(element = name, slot = slot.id(), error = %e, "failed to release slot");
                }
                Err(err)
            }
        }
    }
}

/// Handle to a key inside a secure element
pub struct HardwareKey {
    element: Arc<dyn SecureElement>,
    slot: KeySlot,
    permanent: bool,
    public: Point,
}

impl HardwareKey {
    /// Slot of the key inside its element
    pub fn slot(&self) -> KeySlot {
        self.slot
    }
}

impl PrivateKeyHandle for HardwareKey {
    fn backing(&self) -> KeyBacking {
        KeyBacking::Hardware
    }

    fn public_key(&self) -> &Point {
        &self.public
    }

    fn agree(&self, peer: &Point) -> Result<SecretBuffer<P256_SHARED_SECRET_SIZE>> {
        self.element
            .key_exchange(self.slot, &peer.serialize_uncompressed())
            .map_err(|e| Error::element_agreement(self.element.name(), e))
    }
}

impl Drop for HardwareKey {
    fn drop(&mut self) {
        if self.permanent {
            return;
        }
        if let Err(e) = self.element.delete_key(self.slot) {
            warn!(
                element = self.element.name(),
                slot = self.slot.id(),
                error = %e,
                "failed to delete transient key"
            );
        }
    }
}
