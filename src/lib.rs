//! # keyx
//!
//! P-256 key agreement: cofactor ECDH followed by ANSI X9.63 key derivation
//! with SHA-256.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keyx = "0.3"
//! ```
//!
//! ## Features
//!
//! - `agreement` (default): the key agreement service and its backends
//! - `algorithms`: the primitive layer only (X9.63 KDF, P-256 codec and ECDH)
//! - `serde`: `Serialize`/`Deserialize` for configuration types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`keyx-api`]: error taxonomy and the `KeyAgreement` trait
//! - [`keyx-algorithms`]: X9.63 KDF and P-256 cofactor ECDH
//! - [`keyx-agreement`]: `KeyAgreementService`, software and secure-element backends

// Core re-exports (always available)
pub use keyx_api as api;
pub use keyx_common as common;
pub use keyx_internal as internal;
pub use keyx_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use keyx_algorithms as algorithms;

#[cfg(feature = "agreement")]
pub use keyx_agreement as agreement;

/// Common imports for keyx users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec};

    #[cfg(feature = "agreement")]
    pub use crate::agreement::{
        AgreementConfig, DerivedKey, KeyAgreementService, KeyBacking, KeyPair, SecureElement,
        SoftElement, X963PublicKey,
    };
}
