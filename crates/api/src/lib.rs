//! Public API traits and types for keyx
//!
//! This crate provides the public API surface shared by the keyx crates: the
//! error taxonomy, the [`KeyAgreement`] trait and the byte serialization
//! contracts.

pub mod error;
pub mod traits;

pub use error::{Error, Result, ResultExt};

pub use traits::{KeyAgreement, Serialize, SerializeSecret};

pub use traits::{key_agreement, serialize};
