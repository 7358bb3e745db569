//! Constants for the ANSI X9.63 key derivation function

/// First counter value; X9.63 counts from one
pub const X963_COUNTER_START: u32 = 1;

/// Derived key length used when none is configured
pub const X963_DEFAULT_OUTPUT_SIZE: usize = 32;

/// Largest output the counter can address with SHA-256: 32 * (2^32 - 1)
pub const X963_SHA256_MAX_OUTPUT_SIZE: u64 = 32 * (u32::MAX as u64);

/// Practical cap on a configured output length
pub const X963_OUTPUT_LIMIT: usize = 4096;
