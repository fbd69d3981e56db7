//! Shared fixtures for the known-answer suites.
//!
//! scrypt dominates the runtime, so each (version, full name) master key
//! is derived once and shared by every test in the binary.

use std::sync::OnceLock;

use mpw_core::{AlgorithmVersion, MasterKey};
use secrecy::SecretString;

mod golden_v3;
mod version_matrix;

pub const FULL_NAME: &str = "Robert Lee Mitchell";
pub const MASTER_PASSWORD: &str = "banana colored duckling";
pub const SITE: &str = "masterpasswordapp.com";
pub const SNOWMAN: &str = "\u{26C4}";

pub const KEY_ID: &str = "98EEF4D1DF46D849574A82A03C3177056B15DFFCA29BB3899DE4628453675302";

type KeyCache = [OnceLock<MasterKey>; 4];

fn cached(cache: &'static KeyCache, version: AlgorithmVersion, full_name: &str) -> &'static MasterKey {
    let slot = usize::try_from(version.as_u32()).unwrap();
    cache[slot].get_or_init(|| {
        let password = SecretString::from(MASTER_PASSWORD.to_owned());
        MasterKey::derive(version, full_name, &password).expect("derive should succeed")
    })
}

/// Master key for `Robert Lee Mitchell`.
pub fn robert(version: AlgorithmVersion) -> &'static MasterKey {
    static KEYS: KeyCache = [const { OnceLock::new() }; 4];
    cached(&KEYS, version, FULL_NAME)
}

/// Master key for a full name that is a single multi-byte character.
pub fn snowman(version: AlgorithmVersion) -> &'static MasterKey {
    static KEYS: KeyCache = [const { OnceLock::new() }; 4];
    cached(&KEYS, version, SNOWMAN)
}
