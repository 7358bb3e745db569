//! Key Derivation Functions
//!
//! The only KDF keyx needs is the ANSI X9.63 construction used by cofactor
//! ECDH key agreement. The trait keeps the derivation call shape independent
//! of the hash function behind it.
//!
//! ## Example usage
//!
//! ```
//! use keyx_algorithms::kdf::{KeyDerivationFunction, X963Kdf};
//! use sha2::Sha256;
//!
//! let kdf = X963Kdf::<Sha256>::new();
//! let key = kdf.derive_key(b"shared secret", b"", 32).unwrap();
//! assert_eq!(key.len(), 32);
//! ```

use crate::error::Result;
use keyx_common::SecretVec;

pub mod x963;

pub use x963::{X963Hash, X963Kdf};

/// Common trait for all key derivation functions
pub trait KeyDerivationFunction {
    /// Returns the KDF algorithm name, e.g. `X9.63-KDF-SHA256`
    fn name(&self) -> String;

    /// Fill `output` with key material derived from `secret` and `info`
    fn derive_into(&self, secret: &[u8], info: &[u8], output: &mut [u8]) -> Result<()>;

    /// Derive `length` bytes of key material into a zeroizing buffer
    fn derive_key(&self, secret: &[u8], info: &[u8], length: usize) -> Result<SecretVec> {
        let mut output = SecretVec::zeroed(length);
        self.derive_into(secret, info, output.as_mut_slice())?;
        Ok(output)
    }
}
