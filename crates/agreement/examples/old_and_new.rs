//! Generate one key pair in process memory and one inside a secure element,
//! then derive the shared key from both sides and print everything in hex.
//!
//! Run with `RUST_LOG=debug` to see the service's log events.

use std::sync::Arc;

use keyx_agreement::{KeyAgreementService, SoftElement};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), keyx_api::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let old = KeyAgreementService::software();
    let new = KeyAgreementService::hardware(Arc::new(SoftElement::new()));

    let old_keypair = old.generate()?;
    let new_keypair = new.generate()?;

    println!("old public key ({}): {}", old_keypair.backing(), old_keypair.public_key_hex());
    println!("new public key ({}): {}", new_keypair.backing(), new_keypair.public_key_hex());

    let old_secret = old.compute_shared_secret(&old_keypair, new_keypair.public_key().as_ref())?;
    let new_secret = new.compute_shared_secret(&new_keypair, old_keypair.public_key().as_ref())?;

    println!("old derived key: {}", old_secret.to_hex());
    println!("new derived key: {}", new_secret.to_hex());
    println!("match: {}", old_secret == new_secret);

    Ok(())
}
