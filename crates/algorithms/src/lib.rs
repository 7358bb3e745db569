//! Cryptographic primitives for keyx
//!
//! The primitive layer under the agreement service:
//!
//! - [`kdf`]: the ANSI X9.63 key derivation function, generic over SHA-2
//! - [`ec::p256`]: P-256 scalars, uncompressed point codec and cofactor ECDH
//!
//! Errors from this crate convert into [`keyx_api::Error`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ec;
pub mod error;
pub mod kdf;

pub use error::{validate, Error, Result};
pub use kdf::{KeyDerivationFunction, X963Hash, X963Kdf};
