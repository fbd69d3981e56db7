use std::sync::OnceLock;

use mpw_core::{AlgorithmVersion, MasterKey};
use secrecy::SecretString;

mod concurrency;
mod invalidation;
mod zeroize_on_drop;

pub const FULL_NAME: &str = "Security Suite";
pub const SITE: &str = "example.com";

/// Derive a fresh key. Tests that invalidate need their own.
pub fn fresh_key() -> MasterKey {
    let password = SecretString::from("correct horse battery staple".to_owned());
    MasterKey::derive(AlgorithmVersion::CURRENT, FULL_NAME, &password)
        .expect("derive should succeed")
}

/// A key shared by tests that never invalidate it.
pub fn shared_key() -> &'static MasterKey {
    static KEY: OnceLock<MasterKey> = OnceLock::new();
    KEY.get_or_init(fresh_key)
}
