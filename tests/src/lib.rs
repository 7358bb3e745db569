//! Shared fixtures for the keyx test suites
//!
//! Known-answer vectors live as TOML files under `src/vectors` and are loaded
//! through [`vectors`].

pub mod vectors;

use keyx_agreement::{KeyAgreementService, SoftwareBackend};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Software service drawing scalars from a seeded ChaCha20 stream
pub fn seeded_service(seed: u64) -> KeyAgreementService {
    KeyAgreementService::with_backend(Box::new(SoftwareBackend::with_rng(
        ChaCha20Rng::seed_from_u64(seed),
    )))
}
