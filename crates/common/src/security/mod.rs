//! Security primitives and memory safety utilities
//!
//! Every type in here wipes its contents on drop.

pub mod secret;

pub use secret::{SecretBuffer, SecretVec};
