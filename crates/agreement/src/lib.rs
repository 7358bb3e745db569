//! P-256 key agreement for keyx
//!
//! Generates P-256 key pairs, exports public keys as uncompressed X9.63
//! points and derives symmetric keys with cofactor ECDH followed by the
//! X9.63 SHA-256 KDF.
//!
//! Private keys either live in process memory ([`SoftwareBackend`]) or inside
//! a secure element ([`HardwareBackend`]). Callers use
//! [`KeyAgreementService`] the same way for both.
//!
//! ```
//! use keyx_agreement::KeyAgreementService;
//!
//! let service = KeyAgreementService::software();
//! let alice = service.generate()?;
//! let bob = service.generate()?;
//!
//! let k1 = service.compute_shared_secret(&alice, bob.public_key().as_ref())?;
//! let k2 = service.compute_shared_secret(&bob, alice.public_key().as_ref())?;
//! assert_eq!(k1, k2);
//! # Ok::<(), keyx_api::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod backend;
pub mod config;
pub mod element;
pub mod error;
pub mod service;

pub use backend::{AgreementBackend, HardwareBackend, KeyBacking, PrivateKeyHandle, SoftwareBackend};
pub use config::AgreementConfig;
pub use element::{AccessPolicy, KeyAttributes, KeySlot, SecureElement, SoftElement};
pub use error::{Error, Result};
pub use service::{DerivedKey, KeyAgreementService, KeyPair, X963PublicKey, ALGORITHM_NAME};
