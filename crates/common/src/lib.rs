//! Common implementations shared across keyx
//!
//! Holds the zeroizing containers that carry scalars, raw ECDH output and
//! derived keys between the algorithm and agreement layers.

pub mod security;

pub use security::{SecretBuffer, SecretVec};
