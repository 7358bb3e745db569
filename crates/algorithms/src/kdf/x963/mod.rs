//! ANSI X9.63 Key Derivation Function
//!
//! Implements the hash-based KDF from ANSI X9.63 (also SEC 1 §3.6.1):
//!
//! ```text
//! K_i = Hash(Z || Counter_i || SharedInfo),  Counter_1 = 0x00000001
//! K   = leftmost L bytes of K_1 || K_2 || ...
//! ```
//!
//! The counter is a 32-bit big-endian integer, which limits the output to
//! `hash_len * (2^32 - 1)` bytes.

use core::marker::PhantomData;

use keyx_internal::endian::u32_to_be_bytes;
use keyx_params::traditional::x963::X963_COUNTER_START;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use super::KeyDerivationFunction;
use crate::error::{validate, Error, Result};

/// Hash functions usable with the X9.63 KDF
pub trait X963Hash: Digest {
    /// Name used in the KDF identifier
    const NAME: &'static str;
}

impl X963Hash for Sha256 {
    const NAME: &'static str = "SHA256";
}

impl X963Hash for Sha384 {
    const NAME: &'static str = "SHA384";
}

impl X963Hash for Sha512 {
    const NAME: &'static str = "SHA512";
}

/// X9.63 KDF over the hash function `H`
pub struct X963Kdf<H: X963Hash> {
    _hash: PhantomData<H>,
}

impl<H: X963Hash> Default for X963Kdf<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: X963Hash> X963Kdf<H> {
    /// Create a new KDF instance
    pub fn new() -> Self {
        Self { _hash: PhantomData }
    }

    /// Largest output this instance can produce
    pub fn max_output_len() -> u64 {
        <H as Digest>::output_size() as u64 * u64::from(u32::MAX)
    }

    /// Derive into `output` without constructing an instance
    pub fn derive(secret: &[u8], shared_info: &[u8], output: &mut [u8]) -> Result<()> {
        validate::parameter(!secret.is_empty(), "secret", "shared secret must not be empty")?;
        validate::parameter(!output.is_empty(), "output_len", "must be non-zero")?;
        validate::max_length(
            "X9.63 KDF output",
            output.len() as u64,
            Self::max_output_len(),
        )?;

        let mut counter = X963_COUNTER_START;
        for chunk in output.chunks_mut(<H as Digest>::output_size()) {
            let mut hasher = H::new();
            hasher.update(secret);
            hasher.update(u32_to_be_bytes(counter));
            hasher.update(shared_info);
            let mut block = hasher.finalize();

            chunk.copy_from_slice(&block[..chunk.len()]);
            block.as_mut_slice().zeroize();

            counter = counter.checked_add(1).ok_or(Error::Processing {
                operation: "X9.63 KDF",
                details: "block counter overflow",
            })?;
        }

        Ok(())
    }
}

impl<H: X963Hash> KeyDerivationFunction for X963Kdf<H> {
    fn name(&self) -> String {
        format!("X9.63-KDF-{}", H::NAME)
    }

    fn derive_into(&self, secret: &[u8], info: &[u8], output: &mut [u8]) -> Result<()> {
        Self::derive(secret, info, output)
    }
}
