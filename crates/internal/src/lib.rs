//! Internal utilities for keyx
//!
//! Not part of the public API. Shared by the other keyx crates for
//! constant-time comparison and byte-order conversion.

#![no_std]

pub mod constant_time;
pub mod endian;
