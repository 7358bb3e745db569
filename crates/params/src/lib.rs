//! Constant values for keyx
//!
//! Curve sizes, point encoding tags and key derivation limits shared by the
//! algorithm and agreement crates.

#![no_std]

pub mod traditional;
