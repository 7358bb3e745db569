//! Key derivation settings applied after ECDH

use keyx_params::traditional::x963::{
    X963_DEFAULT_OUTPUT_SIZE, X963_OUTPUT_LIMIT, X963_SHA256_MAX_OUTPUT_SIZE,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters of the X9.63 SHA-256 derivation step
///
/// The defaults (empty shared info, 32-byte output) give the plain
/// `ECDH + X9.63 SHA-256` derivation that interoperates with platform key
/// stores using the same algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgreementConfig {
    /// Context bytes appended to every hash block
    pub shared_info: Vec<u8>,
    /// Derived key length in bytes
    pub output_len: usize,
}

impl Default for AgreementConfig {
    fn default() -> Self {
        Self {
            shared_info: Vec::new(),
            output_len: X963_DEFAULT_OUTPUT_SIZE,
        }
    }
}

impl AgreementConfig {
    /// Largest accepted `output_len`
    pub const MAX_OUTPUT_LEN: usize = X963_OUTPUT_LIMIT;

    /// Set the shared info
    pub fn with_shared_info(mut self, shared_info: impl Into<Vec<u8>>) -> Self {
        self.shared_info = shared_info.into();
        self
    }

    /// Set the derived key length
    pub fn with_output_len(mut self, output_len: usize) -> Self {
        self.output_len = output_len;
        self
    }

    /// Check that the settings describe a derivation that can run
    pub fn validate(&self) -> Result<()> {
        if self.output_len == 0 {
            return Err(Error::Config {
                field: "output_len",
                reason: "must be non-zero",
            });
        }
        if self.output_len > Self::MAX_OUTPUT_LEN
            || self.output_len as u64 > X963_SHA256_MAX_OUTPUT_SIZE
        {
            return Err(Error::Config {
                field: "output_len",
                reason: "exceeds the X9.63 output limit",
            });
        }
        Ok(())
    }
}
