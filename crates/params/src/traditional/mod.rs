//! Constants for traditional (elliptic-curve) key agreement

pub mod ecdh;
pub mod x963;
